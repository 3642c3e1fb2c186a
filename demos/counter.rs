//! Counter
//!
//! This demo wires the counter container to a store and drives it through
//! its bound callbacks, the same way a UI's buttons would.
//!
//! Key concepts:
//! - A container renders once on connect and again on every change
//! - Callbacks dispatch actions; the view never touches state directly
//! - Unknown untyped actions are identity transitions
//!
//! Run with: RUST_LOG=debug cargo run --example counter

use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use unistore::apps::counter::{self, CounterCallbacks};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Counter ===\n");

    let store = counter::store();
    let buttons: Rc<RefCell<Option<CounterCallbacks>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&buttons);

    let connection = counter::container().connect(&store, move |props, callbacks| {
        println!("{}", counter::render(props));
        slot.borrow_mut().get_or_insert_with(|| callbacks.clone());
    });

    let Some(buttons) = buttons.borrow().clone() else {
        return;
    };

    println!("\nclick (+) three times");
    for _ in 0..3 {
        (buttons.increment)();
    }

    println!("\nclick (-)");
    (buttons.decrement)();

    println!("\ndispatch an unknown action");
    if let Err(err) = store.dispatch_json(&serde_json::json!({"kind": "DOUBLE"})) {
        println!("rejected: {err}");
    }

    println!("\nclick (reset)");
    (buttons.reset)();

    println!("\nrendered {} frames", connection.render_count());
    connection.disconnect();
}
