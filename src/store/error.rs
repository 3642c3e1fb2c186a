//! Dispatch error types.

use crate::core::ActionError;
use thiserror::Error;

/// Errors that can occur when dispatching
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// An untyped action could not be decoded and the store rejects such actions
    #[error("Action rejected: {0}")]
    Rejected(#[from] ActionError),

    /// The store behind a dispatcher has been dropped
    #[error("Store no longer exists")]
    StoreDropped,
}
