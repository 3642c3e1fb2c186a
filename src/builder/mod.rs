//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent store builder and the macros for declaring
//! action vocabularies and composing slice reducers.

pub mod error;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;
