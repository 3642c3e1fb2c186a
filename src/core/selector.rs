//! Pure projections from state to view data.

use std::rc::Rc;

/// Pure projection from a state to the data a view needs.
///
/// Selectors are cheap to clone; clones share the projection.
///
/// # Example
///
/// ```rust
/// use unistore::core::Selector;
///
/// let len = Selector::new(|items: &Vec<u32>| items.len());
/// let label = len.map(|n| format!("{n} items"));
///
/// assert_eq!(label.select(&vec![1, 2, 3]), "3 items");
/// ```
pub struct Selector<S, P> {
    project: Rc<dyn Fn(&S) -> P>,
}

impl<S, P> Clone for Selector<S, P> {
    fn clone(&self) -> Self {
        Self {
            project: Rc::clone(&self.project),
        }
    }
}

impl<S: 'static, P: 'static> Selector<S, P> {
    pub fn new<F>(project: F) -> Self
    where
        F: Fn(&S) -> P + 'static,
    {
        Self {
            project: Rc::new(project),
        }
    }

    /// Project the state.
    pub fn select(&self, state: &S) -> P {
        (self.project)(state)
    }

    /// Apply a further projection, returning a new selector.
    pub fn map<Q: 'static>(self, f: impl Fn(P) -> Q + 'static) -> Selector<S, Q> {
        Selector {
            project: Rc::new(move |s: &S| f((self.project)(s))),
        }
    }
}
