//! Action vocabulary.
//!
//! Actions are closed enums. Each variant carries an explicit wire tag, so a
//! typo in a tag is a compile error for typed dispatch and a reported
//! [`ActionError`] for untyped (JSON) dispatch.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;

/// Trait for store actions.
///
/// Implement it with [`action_enum!`](crate::action_enum) rather than by hand;
/// the macro keeps [`Action::KINDS`], [`Action::kind`] and the serde tags in
/// sync.
pub trait Action: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    /// The closed set of wire tags, in declaration order.
    const KINDS: &'static [&'static str];

    /// Wire tag of this action.
    fn kind(&self) -> &'static str;

    /// Check whether `kind` belongs to this vocabulary.
    fn is_known_kind(kind: &str) -> bool {
        Self::KINDS.contains(&kind)
    }
}

/// Errors produced when decoding an untyped action envelope.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    #[error("Malformed action: {0}")]
    Malformed(String),

    #[error("Unknown action kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("Invalid payload for action '{kind}': {message}")]
    InvalidPayload { kind: String, message: String },
}

impl ActionError {
    /// The offending tag, when one was present.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Malformed(_) => None,
            Self::UnknownKind { kind } | Self::InvalidPayload { kind, .. } => Some(kind),
        }
    }
}

/// Decode an action from its JSON envelope `{"kind": "TAG", "payload": ...}`.
///
/// # Example
///
/// ```rust
/// use unistore::action_enum;
/// use unistore::core::{decode_action, ActionError};
/// use serde_json::json;
///
/// action_enum! {
///     pub enum Toggle {
///         On = "ON",
///         Off = "OFF",
///     }
/// }
///
/// assert_eq!(decode_action::<Toggle>(&json!({"kind": "ON"})), Ok(Toggle::On));
/// assert!(matches!(
///     decode_action::<Toggle>(&json!({"kind": "Of"})),
///     Err(ActionError::UnknownKind { .. })
/// ));
/// ```
pub fn decode_action<A: Action>(value: &Value) -> Result<A, ActionError> {
    let object = value
        .as_object()
        .ok_or_else(|| ActionError::Malformed("action must be a JSON object".to_string()))?;

    let kind = match object.get("kind") {
        Some(Value::String(kind)) => kind,
        Some(_) => return Err(ActionError::Malformed("'kind' must be a string".to_string())),
        None => return Err(ActionError::Malformed("missing 'kind' field".to_string())),
    };

    if !A::is_known_kind(kind) {
        return Err(ActionError::UnknownKind { kind: kind.clone() });
    }

    serde_json::from_value(value.clone()).map_err(|e| ActionError::InvalidPayload {
        kind: kind.clone(),
        message: e.to_string(),
    })
}

/// Encode an action into its JSON envelope.
pub fn encode_action<A: Action>(action: &A) -> Result<Value, ActionError> {
    serde_json::to_value(action).map_err(|e| ActionError::InvalidPayload {
        kind: action.kind().to_string(),
        message: e.to_string(),
    })
}
