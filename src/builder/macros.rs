//! Macros for declaring action vocabularies and composing reducers.

/// Declare a closed action enum and implement [`Action`](crate::core::Action)
/// for it.
///
/// Every variant names its wire tag explicitly. Variants may carry a single
/// payload type, which must itself be serde-serializable.
///
/// # Example
///
/// ```
/// use unistore::action_enum;
/// use unistore::core::Action;
///
/// action_enum! {
///     pub enum PlayerAction {
///         Play = "PLAY",
///         Pause = "PAUSE",
///         Seek(u32) = "SEEK",
///     }
/// }
///
/// assert_eq!(PlayerAction::Seek(30).kind(), "SEEK");
/// assert_eq!(PlayerAction::KINDS, &["PLAY", "PAUSE", "SEEK"]);
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(($payload:ty))? = $kind:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(tag = "kind", content = "payload")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $kind)]
                $variant $(($payload))?
            ),*
        }

        impl $crate::core::Action for $name {
            const KINDS: &'static [&'static str] = &[$($kind),*];

            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => $kind),*
                }
            }
        }
    };
}

/// Compose slice reducers into a root reducer.
///
/// The generated function hands each sub-reducer only its own field of the
/// root state and assembles the results. Every field of the root state must
/// be listed, so a forgotten slice is a compile error.
///
/// # Example
///
/// ```
/// use unistore::{action_enum, combine_reducers};
/// use serde::{Deserialize, Serialize};
///
/// action_enum! {
///     pub enum AppAction {
///         Tick = "TICK",
///         Rename(String) = "RENAME",
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// pub struct AppState {
///     ticks: u64,
///     name: String,
/// }
///
/// fn ticks(state: &u64, action: &AppAction) -> u64 {
///     match action {
///         AppAction::Tick => state + 1,
///         _ => *state,
///     }
/// }
///
/// fn name(state: &String, action: &AppAction) -> String {
///     match action {
///         AppAction::Rename(name) => name.clone(),
///         _ => state.clone(),
///     }
/// }
///
/// combine_reducers! {
///     pub fn app_reducer(AppState, AppAction) {
///         ticks: ticks,
///         name: name,
///     }
/// }
///
/// let state = AppState { ticks: 0, name: "a".into() };
/// let state = app_reducer(&state, &AppAction::Tick);
/// assert_eq!(state.ticks, 1);
/// assert_eq!(state.name, "a");
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis fn $fn_name:ident($state:ident, $action:ty) {
            $($field:ident : $reducer:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis fn $fn_name(state: &$state, action: &$action) -> $state {
            $state {
                $($field: ($reducer)(&state.$field, action)),+
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Action;
    use serde::{Deserialize, Serialize};

    crate::action_enum! {
        enum TestAction {
            Start = "START",
            Stop = "STOP",
            Label(String) = "LABEL",
        }
    }

    #[test]
    fn action_enum_macro_generates_trait() {
        assert_eq!(TestAction::Start.kind(), "START");
        assert_eq!(TestAction::Stop.kind(), "STOP");
        assert_eq!(TestAction::Label("x".to_string()).kind(), "LABEL");
        assert_eq!(TestAction::KINDS.len(), 3);
    }

    #[test]
    fn action_enum_supports_visibility() {
        crate::action_enum! {
            pub enum PublicAction {
                Go = "GO",
            }
        }

        assert_eq!(PublicAction::Go.kind(), "GO");
    }

    #[test]
    fn action_enum_serializes_with_wire_tags() {
        let json = serde_json::to_string(&TestAction::Label("hi".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"LABEL","payload":"hi"}"#);

        let back: TestAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestAction::Label("hi".to_string()));
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Root {
        started: bool,
        label: String,
    }

    fn started(state: &bool, action: &TestAction) -> bool {
        match action {
            TestAction::Start => true,
            TestAction::Stop => false,
            TestAction::Label(_) => *state,
        }
    }

    fn label(state: &String, action: &TestAction) -> String {
        match action {
            TestAction::Label(label) => label.clone(),
            _ => state.clone(),
        }
    }

    crate::combine_reducers! {
        fn root_reducer(Root, TestAction) {
            started: started,
            label: label,
        }
    }

    #[test]
    fn combined_reducer_routes_slices() {
        let state = Root {
            started: false,
            label: String::new(),
        };

        let state = root_reducer(&state, &TestAction::Start);
        assert!(state.started);
        assert_eq!(state.label, "");

        let state = root_reducer(&state, &TestAction::Label("done".to_string()));
        assert!(state.started);
        assert_eq!(state.label, "done");
    }

    #[test]
    fn combined_reducer_is_identity_for_unhandled_actions() {
        let state = Root {
            started: true,
            label: "kept".to_string(),
        };

        assert_eq!(root_reducer(&state, &TestAction::Start), state);
    }
}
