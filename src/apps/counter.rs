//! Counter widget: a single number with increment, decrement and reset.

use crate::action_enum;
use crate::container::Container;
use crate::store::{Callback, Dispatcher, Store};
use serde::{Deserialize, Serialize};

/// Counter state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

action_enum! {
    /// Everything that can happen to a counter.
    pub enum CounterAction {
        Increment = "INCREMENT",
        Decrement = "DECREMENT",
        Reset = "RESET",
    }
}

pub fn increment() -> CounterAction {
    CounterAction::Increment
}

pub fn decrement() -> CounterAction {
    CounterAction::Decrement
}

pub fn reset() -> CounterAction {
    CounterAction::Reset
}

/// Counter transition table. Counts saturate at the `i64` bounds.
pub fn counter_reducer(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increment => CounterState {
            count: state.count.saturating_add(1),
        },
        CounterAction::Decrement => CounterState {
            count: state.count.saturating_sub(1),
        },
        CounterAction::Reset => CounterState { count: 0 },
    }
}

/// A fresh counter store starting at zero.
pub fn store() -> Store<CounterState, CounterAction> {
    Store::new(CounterState::default(), counter_reducer)
}

/// What the counter view displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterProps {
    pub count: i64,
}

/// Buttons the counter view exposes.
#[derive(Clone)]
pub struct CounterCallbacks {
    pub increment: Callback,
    pub decrement: Callback,
    pub reset: Callback,
}

pub fn select_props(state: &CounterState) -> CounterProps {
    CounterProps { count: state.count }
}

pub fn bind_actions(dispatch: &Dispatcher<CounterState, CounterAction>) -> CounterCallbacks {
    CounterCallbacks {
        increment: dispatch.bind(increment),
        decrement: dispatch.bind(decrement),
        reset: dispatch.bind(reset),
    }
}

pub fn container() -> Container<CounterState, CounterAction, CounterProps, CounterCallbacks> {
    Container::new(select_props, bind_actions)
}

/// Plain-text rendering of the counter view.
pub fn render(props: &CounterProps) -> String {
    format!("[ {} ]  (+) (-) (reset)", props.count)
}
