//! The store: single owner of application state.

use super::config::{StoreConfig, UnknownActionPolicy};
use super::dispatcher::Dispatcher;
use super::error::DispatchError;
use super::subscription::{ListenerEntry, ListenerList, Subscription};
use crate::core::{decode_action, Action, DispatchHistory, DispatchRecord, Reducer, State};
use chrono::Utc;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// History tag used for actions that had no readable `kind`.
pub const MALFORMED_KIND: &str = "<malformed>";

enum Pending<A> {
    /// Typed action for the reducer
    Action(A),
    /// Undecodable action under the ignore policy; an identity transition
    Ignored(String),
}

pub(crate) struct Inner<S: State, A: Action> {
    state: RefCell<Rc<S>>,
    reducer: Box<dyn Reducer<S, A>>,
    listeners: Rc<ListenerList<S>>,
    next_listener_id: Cell<u64>,
    dispatching: Cell<bool>,
    queue: RefCell<VecDeque<Pending<A>>>,
    history: RefCell<Option<DispatchHistory<S>>>,
    config: StoreConfig,
}

/// Ends a drain even if a reducer or listener panics: resets the
/// dispatching flag and discards actions still queued by the failed round.
struct DispatchingGuard<'a, A> {
    dispatching: &'a Cell<bool>,
    queue: &'a RefCell<VecDeque<Pending<A>>>,
}

impl<A> Drop for DispatchingGuard<'_, A> {
    fn drop(&mut self) {
        if let Ok(mut queue) = self.queue.try_borrow_mut() {
            if !queue.is_empty() {
                warn!(dropped = queue.len(), "discarding queued actions after failed dispatch");
                queue.clear();
            }
        }
        self.dispatching.set(false);
    }
}

impl<S: State, A: Action> Inner<S, A> {
    pub(crate) fn dispatch(&self, action: A) {
        self.enqueue(Pending::Action(action));
    }

    fn enqueue(&self, pending: Pending<A>) {
        self.queue.borrow_mut().push_back(pending);

        if self.dispatching.get() {
            trace!("dispatch during notification queued");
            return;
        }

        self.dispatching.set(true);
        let _guard = DispatchingGuard {
            dispatching: &self.dispatching,
            queue: &self.queue,
        };

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(pending) = next else {
                break;
            };
            self.apply(pending);
        }
    }

    fn apply(&self, pending: Pending<A>) {
        let current = Rc::clone(&self.state.borrow());

        let (kind, next) = match pending {
            Pending::Action(action) => {
                let next = Rc::new(self.reducer.reduce(&current, &action));
                (action.kind().to_string(), next)
            }
            Pending::Ignored(kind) => (kind, Rc::clone(&current)),
        };

        *self.state.borrow_mut() = Rc::clone(&next);
        debug!(kind = %kind, changed = (*current != *next), "dispatched action");

        if let Some(history) = self.history.borrow_mut().as_mut() {
            history.push(DispatchRecord {
                kind,
                from: (*current).clone(),
                to: (*next).clone(),
                timestamp: Utc::now(),
            });
        }

        self.notify(&next);
    }

    fn notify(&self, state: &S) {
        // Listeners added during this round wait for the next one.
        let round: Vec<Rc<ListenerEntry<S>>> = self.listeners.borrow().clone();
        trace!(listeners = round.len(), "notifying listeners");

        for entry in round {
            if entry.active.get() {
                (entry.callback)(state);
            }
        }
    }

    fn dispatch_json(&self, value: &Value) -> Result<(), DispatchError> {
        match decode_action::<A>(value) {
            Ok(action) => {
                self.dispatch(action);
                Ok(())
            }
            Err(err) => match self.config.unknown_actions {
                UnknownActionPolicy::Ignore => {
                    warn!(error = %err, "ignoring undecodable action");
                    let kind = err.kind().unwrap_or(MALFORMED_KIND).to_string();
                    self.enqueue(Pending::Ignored(kind));
                    Ok(())
                }
                UnknownActionPolicy::Reject => {
                    warn!(error = %err, "rejecting undecodable action");
                    Err(DispatchError::Rejected(err))
                }
            },
        }
    }
}

/// Holder of the single current state.
///
/// `Store` is a cheap handle: clones share the same state, reducer and
/// listeners. Construct one per application instance and pass it down.
///
/// Everything runs synchronously on the calling thread. For one dispatch the
/// reducer runs, the state is replaced, and every listener is notified in
/// subscription order before [`dispatch`](Self::dispatch) returns. A dispatch
/// issued from inside a listener is queued and applied once the current round
/// finishes; the outermost `dispatch` returns after the queue drains.
///
/// # Example
///
/// ```rust
/// use unistore::action_enum;
/// use unistore::store::Store;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// action_enum! {
///     pub enum Tally {
///         Add = "ADD",
///     }
/// }
///
/// let store = Store::new(0_u32, |n: &u32, _: &Tally| n + 1);
/// let seen = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&seen);
/// let _subscription = store.subscribe(move |n: &u32| sink.set(*n));
///
/// store.dispatch(Tally::Add);
/// assert_eq!(*store.get_state(), 1);
/// assert_eq!(seen.get(), 1);
/// ```
pub struct Store<S: State, A: Action> {
    inner: Rc<Inner<S, A>>,
}

impl<S: State, A: Action> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: State, A: Action> Store<S, A> {
    /// Create a store with the default configuration.
    pub fn new<R>(initial: S, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::with_config(initial, Box::new(reducer), StoreConfig::default())
    }

    pub(crate) fn with_config(
        initial: S,
        reducer: Box<dyn Reducer<S, A>>,
        config: StoreConfig,
    ) -> Self {
        let history = config.record_history.then(|| match config.history_limit {
            Some(limit) => DispatchHistory::bounded(limit),
            None => DispatchHistory::new(),
        });

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(Rc::new(initial)),
                reducer,
                listeners: Rc::new(RefCell::new(Vec::new())),
                next_listener_id: Cell::new(0),
                dispatching: Cell::new(false),
                queue: RefCell::new(VecDeque::new()),
                history: RefCell::new(history),
                config,
            }),
        }
    }

    /// Apply `action` through the reducer and notify listeners.
    pub fn dispatch(&self, action: A) {
        self.inner.dispatch(action);
    }

    /// Dispatch an untyped action envelope `{"kind": "TAG", "payload": ...}`.
    ///
    /// Undecodable actions follow the configured [`UnknownActionPolicy`].
    pub fn dispatch_json(&self, value: &Value) -> Result<(), DispatchError> {
        self.inner.dispatch_json(value)
    }

    /// Register a listener called after every dispatch with the new state.
    ///
    /// The listener stays registered until [`Subscription::unsubscribe`] is
    /// called; dropping the returned `Subscription` does not remove it.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<S>
    where
        F: Fn(&S) + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);

        let entry = Rc::new(ListenerEntry {
            id,
            active: Cell::new(true),
            callback: Box::new(listener),
        });
        self.inner.listeners.borrow_mut().push(Rc::clone(&entry));
        debug!(listener = id, "listener subscribed");

        Subscription::new(&entry, &self.inner.listeners)
    }

    /// Current snapshot.
    pub fn get_state(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Dispatch history, when enabled in the configuration.
    pub fn history(&self) -> Option<DispatchHistory<S>> {
        self.inner.history.borrow().clone()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// A dispatch-only capability that does not keep the store alive.
    pub fn dispatcher(&self) -> Dispatcher<S, A> {
        Dispatcher::new(Rc::downgrade(&self.inner))
    }
}

impl<S: State, A: Action> std::fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get_state())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
