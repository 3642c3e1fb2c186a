//! Store configuration.

use serde::{Deserialize, Serialize};

/// What `dispatch_json` does with an action it cannot decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownActionPolicy {
    /// Treat it as an identity transition: state is kept, a warning is
    /// logged, and listeners are still notified.
    #[default]
    Ignore,

    /// Return an error; state is kept and listeners are not notified.
    Reject,
}

/// Tunables for a [`Store`](super::Store).
///
/// Deserializes with defaults for missing fields, so an empty JSON object is
/// a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Keep a [`DispatchHistory`](crate::core::DispatchHistory) of every dispatch
    pub record_history: bool,

    /// Maximum number of history records; `None` keeps everything
    pub history_limit: Option<usize>,

    /// Handling of undecodable untyped actions
    pub unknown_actions: UnknownActionPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            record_history: false,
            history_limit: None,
            unknown_actions: UnknownActionPolicy::Ignore,
        }
    }
}
