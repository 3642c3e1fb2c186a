//! Reducers: pure state-transition functions.
//!
//! A reducer maps `(state, action)` to the next state. It must be
//! deterministic and side-effect free, and it must return a value equal to
//! its input for every action it does not handle.

use super::guard::Guard;
use tracing::warn;

/// Pure transition function over a closed action vocabulary.
///
/// Any `Fn(&S, &A) -> S` is a reducer.
///
/// # Example
///
/// ```rust
/// use unistore::core::Reducer;
///
/// let double = |state: &i64, _action: &()| state * 2;
/// assert_eq!(double.reduce(&21, &()), 42);
/// ```
pub trait Reducer<S, A> {
    /// Compute the next state.
    fn reduce(&self, state: &S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, &A) -> S,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}

/// Reducer whose results must pass a [`Guard`].
///
/// When the guard rejects the next state, the input state is returned
/// unchanged, turning an invalid transition into an identity transition.
///
/// # Example
///
/// ```rust
/// use unistore::core::{Guard, GuardedReducer, Reducer};
///
/// let add = |state: &u8, by: &u8| state.saturating_add(*by);
/// let at_most_ten = GuardedReducer::new(add, Guard::new(|s: &u8| *s <= 10));
///
/// assert_eq!(at_most_ten.reduce(&4, &5), 9);
/// assert_eq!(at_most_ten.reduce(&9, &5), 9);
/// ```
pub struct GuardedReducer<S, R> {
    inner: R,
    guard: Guard<S>,
}

impl<S, R> GuardedReducer<S, R> {
    pub fn new(inner: R, guard: Guard<S>) -> Self {
        Self { inner, guard }
    }
}

impl<S, A, R> Reducer<S, A> for GuardedReducer<S, R>
where
    S: Clone,
    A: std::fmt::Debug,
    R: Reducer<S, A>,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        let next = self.inner.reduce(state, action);
        if self.guard.check(&next) {
            next
        } else {
            warn!(?action, "guard rejected next state, keeping current state");
            state.clone()
        }
    }
}
