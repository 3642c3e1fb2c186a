//! Core store types and logic.
//!
//! This module contains the pure functional core:
//! - State snapshots via the `State` trait
//! - Closed action vocabularies via the `Action` trait
//! - Reducers, guards and selectors as pure functions
//! - Immutable dispatch history
//!
//! Nothing in this module holds mutable state; the [`Store`](crate::store::Store)
//! is the only owner of a current value.

mod action;
mod guard;
mod history;
mod reducer;
mod selector;
mod state;

pub use action::{decode_action, encode_action, Action, ActionError};
pub use guard::Guard;
pub use history::{DispatchHistory, DispatchRecord};
pub use reducer::{GuardedReducer, Reducer};
pub use selector::Selector;
pub use state::State;
