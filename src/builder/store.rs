//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, Reducer, State};
use crate::store::{Store, StoreConfig, UnknownActionPolicy};

/// Builder for constructing stores with a fluent API.
///
/// # Example
///
/// ```
/// use unistore::action_enum;
/// use unistore::builder::StoreBuilder;
/// use unistore::store::UnknownActionPolicy;
///
/// action_enum! {
///     pub enum Light {
///         Toggle = "TOGGLE",
///     }
/// }
///
/// let store = StoreBuilder::<bool, Light>::new()
///     .initial(false)
///     .reducer(|on: &bool, _: &Light| !on)
///     .record_history(true)
///     .history_limit(16)
///     .unknown_actions(UnknownActionPolicy::Reject)
///     .build()
///     .unwrap();
///
/// store.dispatch(Light::Toggle);
/// assert!(*store.get_state());
/// assert_eq!(store.history().unwrap().len(), 1);
/// ```
pub struct StoreBuilder<S: State, A: Action> {
    initial: Option<S>,
    reducer: Option<Box<dyn Reducer<S, A>>>,
    config: StoreConfig,
}

impl<S: State, A: Action> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            reducer: None,
            config: StoreConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the root reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Keep at most `limit` history records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    pub fn unknown_actions(mut self, policy: UnknownActionPolicy) -> Self {
        self.config.unknown_actions = policy;
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing or the config is invalid.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;

        if let Some(0) = self.config.history_limit {
            return Err(BuildError::InvalidHistoryLimit(0));
        }

        Ok(Store::with_config(initial, reducer, self.config))
    }
}

impl<S: State, A: Action> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Level {
        value: u8,
    }

    crate::action_enum! {
        enum LevelAction {
            Up = "UP",
        }
    }

    fn reducer(state: &Level, _action: &LevelAction) -> Level {
        Level {
            value: state.value.saturating_add(1),
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StoreBuilder::<Level, LevelAction>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_reducer() {
        let result = StoreBuilder::<Level, LevelAction>::new()
            .initial(Level { value: 0 })
            .build();
        assert!(matches!(result, Err(BuildError::MissingReducer)));
    }

    #[test]
    fn builder_rejects_zero_history_limit() {
        let result = StoreBuilder::<Level, LevelAction>::new()
            .initial(Level { value: 0 })
            .reducer(reducer)
            .history_limit(0)
            .build();
        assert!(matches!(result, Err(BuildError::InvalidHistoryLimit(0))));
    }

    #[test]
    fn fluent_api_builds_store() {
        let store = StoreBuilder::<Level, LevelAction>::new()
            .initial(Level { value: 1 })
            .reducer(reducer)
            .build()
            .unwrap();

        store.dispatch(LevelAction::Up);
        assert_eq!(store.get_state().value, 2);
        assert_eq!(store.config(), &StoreConfig::default());
    }

    #[test]
    fn history_limit_bounds_recorded_history() {
        let store = StoreBuilder::<Level, LevelAction>::new()
            .initial(Level { value: 0 })
            .reducer(reducer)
            .record_history(true)
            .history_limit(2)
            .build()
            .unwrap();

        for _ in 0..5 {
            store.dispatch(LevelAction::Up);
        }

        let history = store.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().to.value, 5);
    }

    #[test]
    fn huge_history_limit_builds() {
        let store = StoreBuilder::<Level, LevelAction>::new()
            .initial(Level { value: 0 })
            .reducer(reducer)
            .record_history(true)
            .history_limit(usize::MAX)
            .build()
            .unwrap();

        store.dispatch(LevelAction::Up);
        assert_eq!(store.history().unwrap().len(), 1);
    }

    #[test]
    fn config_replaces_defaults() {
        let config: StoreConfig = serde_json::from_value(json!({
            "unknown_actions": "reject"
        }))
        .unwrap();

        let store = StoreBuilder::<Level, LevelAction>::new()
            .initial(Level { value: 0 })
            .reducer(reducer)
            .config(config)
            .build()
            .unwrap();

        assert!(store.dispatch_json(&json!({"kind": "DOWN"})).is_err());
    }
}
