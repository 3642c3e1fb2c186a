//! The store: the imperative shell around the pure core.
//!
//! A [`Store`] owns the one current state of an application instance. All
//! writes go through [`Store::dispatch`], which delegates the transition to a
//! pure [`Reducer`](crate::core::Reducer) and then notifies listeners.
//!
//! # Key Concepts
//!
//! - **Store**: shared handle with `dispatch`, `subscribe` and `get_state`
//! - **Subscription**: capability to deregister a listener
//! - **Dispatcher**: weak, dispatch-only capability for view callbacks
//! - **StoreConfig**: history recording and unknown-action policy
//!
//! Stores are single-threaded (`Rc`-based) and never block.

mod config;
mod dispatcher;
mod error;
mod handle;
mod subscription;

pub use config::{StoreConfig, UnknownActionPolicy};
pub use dispatcher::{Callback, Callback1, Dispatcher};
pub use error::DispatchError;
pub use handle::{Store, MALFORMED_KIND};
pub use subscription::Subscription;
