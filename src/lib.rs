//! Unistore: a unidirectional state store built from pure reducers
//!
//! Unistore follows the "pure core, imperative shell" split. Reducers,
//! guards and selectors are pure functions over immutable snapshots; the
//! [`Store`] is the single shell that owns the current value, applies
//! dispatched actions and notifies listeners.
//!
//! # Core Concepts
//!
//! - **Action**: a closed, tagged vocabulary of intended changes (`action_enum!`)
//! - **Reducer**: `(state, action) -> state`, deterministic and side-effect free
//! - **Store**: dispatch, subscribe, and read the current snapshot
//! - **Container**: projects store state into view props and bound callbacks
//!
//! # Example
//!
//! ```rust
//! use unistore::{action_enum, Store};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! struct Light {
//!     on: bool,
//! }
//!
//! action_enum! {
//!     enum Switch {
//!         Toggle = "TOGGLE",
//!         Off = "OFF",
//!     }
//! }
//!
//! fn light(state: &Light, action: &Switch) -> Light {
//!     match action {
//!         Switch::Toggle => Light { on: !state.on },
//!         Switch::Off => Light { on: false },
//!     }
//! }
//!
//! let store = Store::new(Light { on: false }, light);
//! store.dispatch(Switch::Toggle);
//! assert!(store.get_state().on);
//!
//! // Unknown untyped actions leave the state alone.
//! store
//!     .dispatch_json(&serde_json::json!({"kind": "DIM"}))
//!     .unwrap();
//! assert!(store.get_state().on);
//! ```

pub mod apps;
pub mod builder;
pub mod container;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use container::{Connection, Container};
pub use core::{Action, Guard, Reducer, Selector, State};
pub use store::{DispatchError, Dispatcher, Store, StoreConfig, Subscription};
