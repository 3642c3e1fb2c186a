//! The cards slice: card contents keyed by id.

use super::actions::{BoardAction, CardEdit, CardMove, NewCard};
use super::ids::{CardId, ListId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// The list this card belongs to
    pub list_id: ListId,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardsState {
    pub entities: BTreeMap<CardId, Card>,
}

impl CardsState {
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.entities.get(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Reducer for the cards slice.
///
/// List existence is not visible from this slice; the board reducer rejects
/// results that reference missing lists.
pub fn cards_reducer(state: &CardsState, action: &BoardAction) -> CardsState {
    match action {
        BoardAction::CreateCard(NewCard {
            card_id,
            list_id,
            title,
            description,
        }) => {
            if state.entities.contains_key(card_id) {
                return state.clone();
            }
            let mut next = state.clone();
            next.entities.insert(
                *card_id,
                Card {
                    id: *card_id,
                    list_id: *list_id,
                    title: title.clone(),
                    description: description.clone(),
                },
            );
            next
        }
        BoardAction::UpdateCard(CardEdit {
            card_id,
            title,
            description,
        }) => {
            let mut next = state.clone();
            if let Some(card) = next.entities.get_mut(card_id) {
                if let Some(title) = title {
                    card.title = title.clone();
                }
                if let Some(description) = description {
                    card.description = description.clone();
                }
            }
            next
        }
        BoardAction::RemoveCard(card_id) => {
            let mut next = state.clone();
            next.entities.remove(card_id);
            next
        }
        BoardAction::RemoveList(list_id) => {
            let mut next = state.clone();
            next.entities.retain(|_, card| card.list_id != *list_id);
            next
        }
        BoardAction::MoveCard(CardMove {
            card_id, to_list, ..
        }) => {
            let mut next = state.clone();
            if let Some(card) = next.entities.get_mut(card_id) {
                card.list_id = *to_list;
            }
            next
        }
        BoardAction::CreateList(_) | BoardAction::RenameList(_) => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::kanban::actions::*;

    fn list() -> ListId {
        ListId::from_u128(1)
    }

    fn card(n: u128) -> CardId {
        CardId::from_u128(100 + n)
    }

    fn one_card() -> CardsState {
        cards_reducer(
            &CardsState::default(),
            &create_card(card(1), list(), "Title", "Body"),
        )
    }

    #[test]
    fn create_card_stores_contents() {
        let state = one_card();
        let stored = state.get(&card(1)).unwrap();
        assert_eq!(stored.title, "Title");
        assert_eq!(stored.description, "Body");
        assert_eq!(stored.list_id, list());
    }

    #[test]
    fn duplicate_create_is_identity() {
        let state = one_card();
        let next = cards_reducer(&state, &create_card(card(1), list(), "Other", ""));
        assert_eq!(next, state);
    }

    #[test]
    fn update_card_changes_only_given_fields() {
        let next = cards_reducer(&one_card(), &update_card(card(1), None, Some("New".into())));
        let stored = next.get(&card(1)).unwrap();
        assert_eq!(stored.title, "Title");
        assert_eq!(stored.description, "New");
    }

    #[test]
    fn update_missing_card_is_identity() {
        let state = one_card();
        let next = cards_reducer(&state, &update_card(card(2), Some("x".into()), None));
        assert_eq!(next, state);
    }

    #[test]
    fn remove_list_cascades_to_its_cards() {
        let other = ListId::from_u128(2);
        let state = cards_reducer(&one_card(), &create_card(card(2), other, "Keep", ""));
        let next = cards_reducer(&state, &remove_list(list()));

        assert!(next.get(&card(1)).is_none());
        assert!(next.get(&card(2)).is_some());
    }

    #[test]
    fn move_card_updates_back_reference() {
        let other = ListId::from_u128(2);
        let next = cards_reducer(&one_card(), &move_card(card(1), other, 0));
        assert_eq!(next.get(&card(1)).unwrap().list_id, other);
    }

    #[test]
    fn list_actions_are_outside_this_slice() {
        let state = one_card();
        assert_eq!(cards_reducer(&state, &create_list(list(), "x")), state);
        assert_eq!(cards_reducer(&state, &rename_list(list(), "y")), state);
    }
}
