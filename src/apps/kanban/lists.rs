//! The lists slice: list titles, display order and card membership.

use super::actions::{BoardAction, CardMove, ListTitle, NewCard, NewList};
use super::ids::{CardId, ListId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    /// Card ids in display order
    pub cards: Vec<CardId>,
}

/// Normalized lists: entities by id plus display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListsState {
    pub order: Vec<ListId>,
    pub entities: BTreeMap<ListId, List>,
}

impl ListsState {
    pub fn get(&self, id: &ListId) -> Option<&List> {
        self.entities.get(id)
    }

    /// Lists in display order.
    pub fn iter(&self) -> impl Iterator<Item = &List> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// The list currently holding `card`.
    pub fn list_of(&self, card: &CardId) -> Option<ListId> {
        self.entities
            .values()
            .find(|list| list.cards.contains(card))
            .map(|list| list.id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn with_list(&self, id: &ListId, edit: impl FnOnce(&mut List)) -> Self {
        let mut next = self.clone();
        if let Some(list) = next.entities.get_mut(id) {
            edit(list);
        }
        next
    }
}

/// Reducer for the lists slice.
pub fn lists_reducer(state: &ListsState, action: &BoardAction) -> ListsState {
    match action {
        BoardAction::CreateList(NewList { list_id, title }) => {
            if state.entities.contains_key(list_id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.order.push(*list_id);
            next.entities.insert(
                *list_id,
                List {
                    id: *list_id,
                    title: title.clone(),
                    cards: Vec::new(),
                },
            );
            next
        }
        BoardAction::RenameList(ListTitle { list_id, title }) => {
            state.with_list(list_id, |list| list.title = title.clone())
        }
        BoardAction::RemoveList(list_id) => {
            let mut next = state.clone();
            next.order.retain(|id| id != list_id);
            next.entities.remove(list_id);
            next
        }
        BoardAction::CreateCard(NewCard {
            card_id, list_id, ..
        }) => {
            if state.list_of(card_id).is_some() {
                return state.clone();
            }
            state.with_list(list_id, |list| list.cards.push(*card_id))
        }
        BoardAction::RemoveCard(card_id) => match state.list_of(card_id) {
            Some(owner) => state.with_list(&owner, |list| list.cards.retain(|id| id != card_id)),
            None => state.clone(),
        },
        BoardAction::MoveCard(CardMove {
            card_id,
            to_list,
            index,
        }) => {
            let Some(from_list) = state.list_of(card_id) else {
                return state.clone();
            };
            if !state.entities.contains_key(to_list) {
                return state.clone();
            }
            state
                .with_list(&from_list, |list| list.cards.retain(|id| id != card_id))
                .with_list(to_list, |list| {
                    let at = (*index).min(list.cards.len());
                    list.cards.insert(at, *card_id);
                })
        }
        BoardAction::UpdateCard(_) => state.clone(),
    }
}
