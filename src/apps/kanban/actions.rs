//! Kanban action vocabulary and constructors.
//!
//! Constructors never generate ids; callers pass them in so that reducers
//! stay deterministic.

use super::ids::{CardId, ListId};
use crate::action_enum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewList {
    pub list_id: ListId,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListTitle {
    pub list_id: ListId,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCard {
    pub card_id: CardId,
    pub list_id: ListId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Partial card update; `None` fields are left as they are.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardEdit {
    pub card_id: CardId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Move a card to `index` within `to_list`. Indices past the end append.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardMove {
    pub card_id: CardId,
    pub to_list: ListId,
    pub index: usize,
}

action_enum! {
    /// Everything that can happen to a board.
    pub enum BoardAction {
        CreateList(NewList) = "CREATE_LIST",
        RenameList(ListTitle) = "RENAME_LIST",
        RemoveList(ListId) = "REMOVE_LIST",
        CreateCard(NewCard) = "CREATE_CARD",
        UpdateCard(CardEdit) = "UPDATE_CARD",
        RemoveCard(CardId) = "REMOVE_CARD",
        MoveCard(CardMove) = "MOVE_CARD",
    }
}

pub fn create_list(list_id: ListId, title: impl Into<String>) -> BoardAction {
    BoardAction::CreateList(NewList {
        list_id,
        title: title.into(),
    })
}

pub fn rename_list(list_id: ListId, title: impl Into<String>) -> BoardAction {
    BoardAction::RenameList(ListTitle {
        list_id,
        title: title.into(),
    })
}

pub fn remove_list(list_id: ListId) -> BoardAction {
    BoardAction::RemoveList(list_id)
}

pub fn create_card(
    card_id: CardId,
    list_id: ListId,
    title: impl Into<String>,
    description: impl Into<String>,
) -> BoardAction {
    BoardAction::CreateCard(NewCard {
        card_id,
        list_id,
        title: title.into(),
        description: description.into(),
    })
}

pub fn update_card(
    card_id: CardId,
    title: Option<String>,
    description: Option<String>,
) -> BoardAction {
    BoardAction::UpdateCard(CardEdit {
        card_id,
        title,
        description,
    })
}

pub fn remove_card(card_id: CardId) -> BoardAction {
    BoardAction::RemoveCard(card_id)
}

pub fn move_card(card_id: CardId, to_list: ListId, index: usize) -> BoardAction {
    BoardAction::MoveCard(CardMove {
        card_id,
        to_list,
        index,
    })
}
