//! Kanbananza: a prototype kanban board.
//!
//! The board state is normalized into two slices. The lists slice owns titles,
//! display order and which cards each list holds; the cards slice owns card
//! contents. Each slice has its own reducer, and [`board_reducer`] combines
//! them and refuses any result that breaks [`BoardState::validate`].
//!
//! # Example
//!
//! ```rust
//! use unistore::apps::kanban::{self, create_card, create_list, CardId, ListId};
//!
//! let store = kanban::store();
//! let todo = ListId::generate();
//! store.dispatch(create_list(todo, "Todo"));
//! store.dispatch(create_card(CardId::generate(), todo, "Write docs", ""));
//!
//! // Cards cannot be created in a list that does not exist.
//! store.dispatch(create_card(CardId::generate(), ListId::generate(), "Lost", ""));
//!
//! assert_eq!(store.get_state().cards.len(), 1);
//! assert!(store.get_state().is_consistent());
//! ```

mod actions;
mod board;
mod cards;
mod containers;
mod ids;
mod lists;

pub use actions::{
    create_card, create_list, move_card, remove_card, remove_list, rename_list, update_card,
    BoardAction, CardEdit, CardMove, ListTitle, NewCard, NewList,
};
pub use board::{board_reducer, combined_reducer, BoardState, BoardViolation};
pub use cards::{cards_reducer, Card, CardsState};
pub use containers::{
    bind_board, bind_list, board_container, list_container, render_board, render_list,
    select_board, select_list, BoardCallbacks, BoardContainer, BoardProps, CardSummary,
    ListCallbacks, ListContainer, ListProps,
};
pub use ids::{CardId, ListId};
pub use lists::{lists_reducer, List, ListsState};

use crate::store::Store;

/// A fresh, empty board store.
pub fn store() -> Store<BoardState, BoardAction> {
    Store::new(BoardState::default(), board_reducer())
}
