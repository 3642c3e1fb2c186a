//! Root board state, its invariants, and the root reducer.

use super::actions::BoardAction;
use super::cards::{cards_reducer, CardsState};
use super::ids::{CardId, ListId};
use super::lists::{lists_reducer, ListsState};
use crate::combine_reducers;
use crate::core::{Guard, GuardedReducer, Reducer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Normalized board: each field is a slice owned by its own reducer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub lists: ListsState,
    pub cards: CardsState,
}

/// A broken normalization invariant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardViolation {
    #[error("List {0} is ordered but does not exist")]
    OrderedListMissing(ListId),

    #[error("List {0} exists but is not ordered")]
    UnorderedList(ListId),

    #[error("List {0} appears more than once in the order")]
    DuplicateListInOrder(ListId),

    #[error("List stored under {key} carries id {found}")]
    ListKeyMismatch { key: ListId, found: ListId },

    #[error("List {list} references missing card {card}")]
    DanglingCard { list: ListId, card: CardId },

    #[error("Card {0} is referenced by more than one list slot")]
    DuplicateCard(CardId),

    #[error("Card {card} sits in list {list} but points at {found}")]
    BackReferenceMismatch {
        card: CardId,
        list: ListId,
        found: ListId,
    },

    #[error("Card {card} is not placed in any list (claims {list})")]
    OrphanCard { card: CardId, list: ListId },
}

impl BoardState {
    /// Check every normalization invariant, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BoardViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BoardViolation>>> =
            vec![Validation::success(())];

        let mut ordered = BTreeSet::new();
        for id in &self.lists.order {
            if !ordered.insert(*id) {
                checks.push(Validation::fail(BoardViolation::DuplicateListInOrder(*id)));
            }
            if !self.lists.entities.contains_key(id) {
                checks.push(Validation::fail(BoardViolation::OrderedListMissing(*id)));
            }
        }

        let mut placed = BTreeSet::new();
        for (key, list) in &self.lists.entities {
            if !ordered.contains(key) {
                checks.push(Validation::fail(BoardViolation::UnorderedList(*key)));
            }
            if list.id != *key {
                checks.push(Validation::fail(BoardViolation::ListKeyMismatch {
                    key: *key,
                    found: list.id,
                }));
            }

            for card_id in &list.cards {
                if !placed.insert(*card_id) {
                    checks.push(Validation::fail(BoardViolation::DuplicateCard(*card_id)));
                }
                match self.cards.get(card_id) {
                    None => checks.push(Validation::fail(BoardViolation::DanglingCard {
                        list: *key,
                        card: *card_id,
                    })),
                    Some(card) if card.list_id != *key => {
                        checks.push(Validation::fail(BoardViolation::BackReferenceMismatch {
                            card: *card_id,
                            list: *key,
                            found: card.list_id,
                        }))
                    }
                    Some(_) => {}
                }
            }
        }

        for card in self.cards.entities.values() {
            if !placed.contains(&card.id) {
                checks.push(Validation::fail(BoardViolation::OrphanCard {
                    card: card.id,
                    list: card.list_id,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// All violations as a plain list; empty when the board is consistent.
    pub fn violations(&self) -> Vec<BoardViolation> {
        match self.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.validate().is_success()
    }
}

combine_reducers! {
    /// Slice-wise composition without the consistency check.
    pub fn combined_reducer(BoardState, BoardAction) {
        lists: lists_reducer,
        cards: cards_reducer,
    }
}

/// Root board reducer.
///
/// Runs the slice reducers and keeps the current board when the result would
/// break a normalization invariant, such as a card created in a missing list.
pub fn board_reducer() -> impl Reducer<BoardState, BoardAction> {
    GuardedReducer::new(
        combined_reducer,
        Guard::new(|board: &BoardState| board.is_consistent()),
    )
}
