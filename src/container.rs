//! Container adaptation: bridging a store to a presentational view.
//!
//! A [`Container`] pairs a narrow projection of store state (`select_props`)
//! with a set of callbacks bound to dispatch (`bind_actions`). Connecting it
//! to a store renders the view once and then again whenever a notification
//! changes the projected props. Rendering itself belongs to the caller's view
//! closure.

use crate::core::{Action, Selector, State};
use crate::store::{Dispatcher, Store, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

/// Adapter from store state and dispatch to view props.
///
/// `P` is the data the view reads, `C` the callbacks it may invoke.
///
/// # Example
///
/// ```rust
/// use unistore::action_enum;
/// use unistore::container::Container;
/// use unistore::store::{Callback, Store};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// action_enum! {
///     pub enum Bell {
///         Ring = "RING",
///     }
/// }
///
/// let store = Store::new(0_u32, |rings: &u32, _: &Bell| rings + 1);
/// let container = Container::new(
///     |rings: &u32| *rings,
///     |dispatch| -> Callback { dispatch.bind(|| Bell::Ring) },
/// );
///
/// let frames = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&frames);
/// let connection = container.connect(&store, move |rings: &u32, _ring: &Callback| {
///     sink.borrow_mut().push(*rings);
/// });
///
/// store.dispatch(Bell::Ring);
/// assert_eq!(*frames.borrow(), vec![0, 1]);
/// connection.disconnect();
/// ```
pub struct Container<S: State, A: Action, P, C> {
    selector: Selector<S, P>,
    binder: Box<dyn Fn(&Dispatcher<S, A>) -> C>,
}

impl<S, A, P, C> Container<S, A, P, C>
where
    S: State,
    A: Action,
    P: PartialEq + 'static,
    C: 'static,
{
    pub fn new<F, B>(select_props: F, bind_actions: B) -> Self
    where
        F: Fn(&S) -> P + 'static,
        B: Fn(&Dispatcher<S, A>) -> C + 'static,
    {
        Self::from_selector(Selector::new(select_props), bind_actions)
    }

    pub fn from_selector<B>(selector: Selector<S, P>, bind_actions: B) -> Self
    where
        B: Fn(&Dispatcher<S, A>) -> C + 'static,
    {
        Self {
            selector,
            binder: Box::new(bind_actions),
        }
    }

    /// Project the state into view props.
    pub fn select_props(&self, state: &S) -> P {
        self.selector.select(state)
    }

    /// Build the view callbacks for a dispatcher.
    pub fn bind_actions(&self, dispatcher: &Dispatcher<S, A>) -> C {
        (self.binder)(dispatcher)
    }

    /// Render `view` now and after every notification that changes the props.
    ///
    /// The view is skipped when the projected props equal the last rendered
    /// ones. Dropping the returned [`Connection`] disconnects the view.
    pub fn connect<V>(&self, store: &Store<S, A>, view: V) -> Connection<S>
    where
        V: FnMut(&P, &C) + 'static,
    {
        let callbacks = self.bind_actions(&store.dispatcher());
        let props = self.select_props(&store.get_state());
        let view = RefCell::new(view);
        let renders = Rc::new(Cell::new(0_usize));

        (view.borrow_mut())(&props, &callbacks);
        renders.set(1);

        let last = RefCell::new(props);
        let selector = self.selector.clone();
        let counter = Rc::clone(&renders);
        let subscription = store.subscribe(move |state: &S| {
            let next = selector.select(state);
            if *last.borrow() == next {
                trace!("props unchanged, skipping render");
                return;
            }
            (view.borrow_mut())(&next, &callbacks);
            counter.set(counter.get() + 1);
            *last.borrow_mut() = next;
        });

        Connection {
            subscription,
            renders,
        }
    }
}

/// A view connected to a store.
#[must_use = "dropping a Connection disconnects the view"]
pub struct Connection<S> {
    subscription: Subscription<S>,
    renders: Rc<Cell<usize>>,
}

impl<S> Connection<S> {
    /// Number of times the view has been rendered, including the first.
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    pub fn is_connected(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop updating the view.
    pub fn disconnect(self) {
        drop(self);
    }
}

impl<S> Drop for Connection<S> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}
