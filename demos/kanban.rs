//! Kanbananza
//!
//! This demo builds a small board through the board and list containers and
//! shows that transitions breaking the board's invariants are ignored.
//!
//! Key concepts:
//! - Normalized state: lists and cards live in separate slices
//! - Slice reducers combined into one guarded board reducer
//! - List views re-render only when their own list changes
//!
//! Run with: RUST_LOG=unistore=debug cargo run --example kanban

use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use unistore::apps::kanban::{
    self, create_card, list_container, render_board, render_list, BoardAction, BoardState, CardId,
    ListCallbacks, ListId,
};
use unistore::builder::StoreBuilder;
use unistore::store::UnknownActionPolicy;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Kanbananza ===\n");

    let store = match StoreBuilder::<BoardState, BoardAction>::new()
        .initial(BoardState::default())
        .reducer(kanban::board_reducer())
        .record_history(true)
        .history_limit(32)
        .unknown_actions(UnknownActionPolicy::Reject)
        .build()
    {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to build store: {err}");
            return;
        }
    };

    let todo = ListId::generate();
    let done = ListId::generate();
    let board = kanban::board_container().connect(&store, |props, _callbacks| {
        println!("[board] {} lists", props.lists.len());
    });
    store.dispatch(kanban::create_list(todo, "Todo"));
    store.dispatch(kanban::create_list(done, "Done"));

    let todo_buttons: Rc<RefCell<Option<ListCallbacks>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&todo_buttons);
    let todo_view = list_container(todo).connect(&store, move |props, callbacks| {
        match props {
            Some(props) => print!("[todo view]\n{}", render_list(props)),
            None => println!("[todo view] list removed"),
        }
        slot.borrow_mut().get_or_insert_with(|| callbacks.clone());
    });

    let Some(todo_buttons) = todo_buttons.borrow().clone() else {
        return;
    };

    println!("\nadd cards to Todo");
    (todo_buttons.add_card)("Sketch the board".to_string());
    (todo_buttons.add_card)("Write reducers".to_string());

    println!("\nadd a card to Done (the Todo view stays quiet)");
    let shipped = CardId::generate();
    store.dispatch(create_card(shipped, done, "Pick a name", ""));

    println!("\nmove it into Todo at the top");
    (todo_buttons.move_card_here)((shipped, 0));

    println!("\ncreate a card in a list that does not exist");
    store.dispatch(create_card(CardId::generate(), ListId::generate(), "Lost", ""));

    println!("\ndispatch an unknown action with the reject policy");
    if let Err(err) = store.dispatch_json(&serde_json::json!({"kind": "ARCHIVE_BOARD"})) {
        println!("rejected: {err}");
    }

    println!("\n=== Final board ===\n{}", render_board(&store.get_state()));

    if let Some(history) = store.history() {
        println!("{} dispatches recorded", history.len());
        for record in history.records() {
            let marker = if record.changed() { "*" } else { " " };
            println!(" {marker} {}", record.kind);
        }
    }

    println!(
        "\nboard rendered {} times, todo view {} times",
        board.render_count(),
        todo_view.render_count()
    );
}
