//! Guard predicates over state.
//!
//! Guards are pure boolean functions. [`GuardedReducer`](super::GuardedReducer)
//! uses them to veto transitions that would produce an invalid state.

/// Pure predicate over a state value.
///
/// # Example
///
/// ```rust
/// use unistore::core::Guard;
///
/// let non_negative = Guard::new(|count: &i64| *count >= 0);
///
/// assert!(non_negative.check(&0));
/// assert!(!non_negative.check(&-1));
/// ```
pub struct Guard<S> {
    predicate: Box<dyn Fn(&S) -> bool>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that accepts every state.
    pub fn always() -> Self
    where
        S: 'static,
    {
        Self::new(|_| true)
    }

    /// Check if the guard accepts this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Combine two guards; both must accept.
    pub fn and(self, other: Guard<S>) -> Self
    where
        S: 'static,
    {
        Self::new(move |s| self.check(s) && other.check(s))
    }
}
