//! Listener registration.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub(crate) type ListenerList<S> = RefCell<Vec<Rc<ListenerEntry<S>>>>;

pub(crate) struct ListenerEntry<S> {
    pub(crate) id: u64,
    pub(crate) active: Cell<bool>,
    pub(crate) callback: Box<dyn Fn(&S)>,
}

/// Capability to deregister a store listener.
///
/// Dropping a `Subscription` does not unsubscribe; call
/// [`unsubscribe`](Self::unsubscribe). A listener unsubscribed while a
/// notification round is running receives no further calls, including the
/// rest of that round.
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription<S> {
    id: u64,
    entry: Weak<ListenerEntry<S>>,
    listeners: Weak<ListenerList<S>>,
}

impl<S> Subscription<S> {
    pub(crate) fn new(entry: &Rc<ListenerEntry<S>>, listeners: &Rc<ListenerList<S>>) -> Self {
        Self {
            id: entry.id,
            entry: Rc::downgrade(entry),
            listeners: Rc::downgrade(listeners),
        }
    }

    /// Identifier of the listener, unique within its store.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stop the listener. Calling this more than once is harmless.
    pub fn unsubscribe(&self) {
        if let Some(entry) = self.entry.upgrade() {
            entry.active.set(false);
        }
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|entry| entry.id != self.id);
        }
        tracing::debug!(listener = self.id, "listener unsubscribed");
    }

    /// Whether the listener will still be notified.
    pub fn is_active(&self) -> bool {
        self.entry
            .upgrade()
            .is_some_and(|entry| entry.active.get())
    }
}

impl<S> std::fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
