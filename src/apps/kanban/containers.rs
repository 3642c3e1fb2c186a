//! Board and list containers.
//!
//! Callbacks generate fresh ids before dispatching, so the actions that reach
//! the reducer are fully determined.

use super::actions::{
    create_card, create_list, move_card, remove_card, remove_list, rename_list, BoardAction,
    CardEdit,
};
use super::board::BoardState;
use super::ids::{CardId, ListId};
use crate::container::Container;
use crate::store::{Callback, Callback1, Dispatcher};

pub type BoardContainer = Container<BoardState, BoardAction, BoardProps, BoardCallbacks>;
pub type ListContainer = Container<BoardState, BoardAction, Option<ListProps>, ListCallbacks>;

/// The board view only needs list ids in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardProps {
    pub lists: Vec<ListId>,
}

#[derive(Clone)]
pub struct BoardCallbacks {
    /// Create a list with the given title
    pub add_list: Callback1<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSummary {
    pub id: CardId,
    pub title: String,
}

/// What one list view displays. `None` once the list has been removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListProps {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<CardSummary>,
}

#[derive(Clone)]
pub struct ListCallbacks {
    pub rename: Callback1<String>,
    /// Add a card with the given title to the end of this list
    pub add_card: Callback1<String>,
    pub edit_card: Callback1<CardEdit>,
    pub remove_card: Callback1<CardId>,
    /// Move a card into this list at an index
    pub move_card_here: Callback1<(CardId, usize)>,
    pub remove_list: Callback,
}

pub fn select_board(board: &BoardState) -> BoardProps {
    BoardProps {
        lists: board.lists.order.clone(),
    }
}

pub fn select_list(board: &BoardState, list_id: ListId) -> Option<ListProps> {
    let list = board.lists.get(&list_id)?;
    let cards = list
        .cards
        .iter()
        .filter_map(|id| board.cards.get(id))
        .map(|card| CardSummary {
            id: card.id,
            title: card.title.clone(),
        })
        .collect();

    Some(ListProps {
        id: list.id,
        title: list.title.clone(),
        cards,
    })
}

pub fn bind_board(dispatch: &Dispatcher<BoardState, BoardAction>) -> BoardCallbacks {
    BoardCallbacks {
        add_list: dispatch.bind1(|title: String| create_list(ListId::generate(), title)),
    }
}

pub fn bind_list(
    dispatch: &Dispatcher<BoardState, BoardAction>,
    list_id: ListId,
) -> ListCallbacks {
    ListCallbacks {
        rename: dispatch.bind1(move |title: String| rename_list(list_id, title)),
        add_card: dispatch
            .bind1(move |title: String| create_card(CardId::generate(), list_id, title, "")),
        edit_card: dispatch.bind1(BoardAction::UpdateCard),
        remove_card: dispatch.bind1(remove_card),
        move_card_here: dispatch
            .bind1(move |(card_id, index): (CardId, usize)| move_card(card_id, list_id, index)),
        remove_list: dispatch.bind(move || remove_list(list_id)),
    }
}

pub fn board_container() -> BoardContainer {
    Container::new(select_board, bind_board)
}

pub fn list_container(list_id: ListId) -> ListContainer {
    Container::new(
        move |board: &BoardState| select_list(board, list_id),
        move |dispatch: &Dispatcher<BoardState, BoardAction>| bind_list(dispatch, list_id),
    )
}

/// Plain-text rendering of one list view.
pub fn render_list(props: &ListProps) -> String {
    let header = format!("## {} ({})\n", props.title, props.cards.len());
    let cards = props
        .cards
        .iter()
        .map(|card| format!("  - {}\n", card.title));
    std::iter::once(header).chain(cards).collect()
}

/// Plain-text rendering of the whole board, lists in display order.
pub fn render_board(board: &BoardState) -> String {
    select_board(board)
        .lists
        .into_iter()
        .filter_map(|id| select_list(board, id))
        .map(|props| render_list(&props))
        .collect()
}
