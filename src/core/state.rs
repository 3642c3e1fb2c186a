//! Core State trait for store snapshots.
//!
//! A state value is an immutable snapshot. Reducers never mutate a state in
//! place; every transition builds a new value.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Trait for store states.
///
/// # Required Traits
///
/// - `Clone`: identity transitions hand back a copy of the input
/// - `PartialEq`: containers compare projections and tests compare snapshots
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots are recorded in dispatch history
///
/// Every type meeting these bounds is a `State`.
///
/// # Example
///
/// ```rust
/// use unistore::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Clicks {
///     total: u32,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<Clicks>();
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {}

impl<T> State for T where T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {}
