//! Dispatch-only store capability.

use super::error::DispatchError;
use super::handle::Inner;
use crate::core::{Action, State};
use std::rc::{Rc, Weak};
use tracing::warn;

/// Shared view-callback that takes no argument.
pub type Callback = Rc<dyn Fn()>;

/// Shared view-callback that takes one argument.
pub type Callback1<T> = Rc<dyn Fn(T)>;

/// Capability to dispatch into one store.
///
/// Holds only a weak reference, so callbacks built from it can be stored in
/// listeners without keeping the store alive.
pub struct Dispatcher<S: State, A: Action> {
    store: Weak<Inner<S, A>>,
}

impl<S: State, A: Action> Clone for Dispatcher<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: Weak::clone(&self.store),
        }
    }
}

impl<S: State, A: Action> Dispatcher<S, A> {
    pub(crate) fn new(store: Weak<Inner<S, A>>) -> Self {
        Self { store }
    }

    /// Dispatch `action`; fails only if the store has been dropped.
    pub fn dispatch(&self, action: A) -> Result<(), DispatchError> {
        let store = self.store.upgrade().ok_or(DispatchError::StoreDropped)?;
        store.dispatch(action);
        Ok(())
    }

    /// Bind an action constructor into a view callback.
    pub fn bind<F>(&self, make_action: F) -> Callback
    where
        F: Fn() -> A + 'static,
    {
        let dispatcher = self.clone();
        Rc::new(move || dispatcher.dispatch_or_warn(make_action()))
    }

    /// Bind a one-argument action constructor into a view callback.
    pub fn bind1<T, F>(&self, make_action: F) -> Callback1<T>
    where
        T: 'static,
        F: Fn(T) -> A + 'static,
    {
        let dispatcher = self.clone();
        Rc::new(move |arg| dispatcher.dispatch_or_warn(make_action(arg)))
    }

    fn dispatch_or_warn(&self, action: A) {
        let kind = action.kind();
        if let Err(err) = self.dispatch(action) {
            warn!(kind, error = %err, "view callback fired after store teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::store::{DispatchError, Store};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Total {
        value: i32,
    }

    crate::action_enum! {
        enum TotalAction {
            Add(i32) = "ADD",
            Clear = "CLEAR",
        }
    }

    fn reducer(state: &Total, action: &TotalAction) -> Total {
        match action {
            TotalAction::Add(n) => Total {
                value: state.value + n,
            },
            TotalAction::Clear => Total { value: 0 },
        }
    }

    #[test]
    fn dispatcher_reaches_store() {
        let store = Store::new(Total { value: 0 }, reducer);
        let dispatcher = store.dispatcher();

        dispatcher.dispatch(TotalAction::Add(5)).unwrap();
        assert_eq!(store.get_state().value, 5);
    }

    #[test]
    fn bound_callbacks_dispatch() {
        let store = Store::new(Total { value: 0 }, reducer);
        let dispatcher = store.dispatcher();
        let add = dispatcher.bind1(TotalAction::Add);
        let clear = dispatcher.bind(|| TotalAction::Clear);

        add(2);
        add(3);
        assert_eq!(store.get_state().value, 5);

        clear();
        assert_eq!(store.get_state().value, 0);
    }

    #[test]
    fn dispatcher_does_not_keep_store_alive() {
        let store = Store::new(Total { value: 0 }, reducer);
        let dispatcher = store.dispatcher();
        let clear = dispatcher.bind(|| TotalAction::Clear);
        drop(store);

        assert_eq!(
            dispatcher.dispatch(TotalAction::Clear),
            Err(DispatchError::StoreDropped)
        );
        clear();
    }
}
