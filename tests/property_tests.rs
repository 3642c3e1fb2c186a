//! Property-based tests for reducers and the store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use unistore::apps::counter::{
    counter_reducer, decrement, increment, reset, CounterAction, CounterState,
};
use unistore::apps::kanban::{
    board_reducer, cards_reducer, create_card, create_list, lists_reducer, move_card, remove_card,
    remove_list, rename_list, update_card, BoardAction, BoardState, CardId, CardsState, ListId,
    ListsState,
};
use unistore::core::{Action, Reducer};
use unistore::StoreBuilder;

fn counter_action() -> impl Strategy<Value = CounterAction> {
    prop_oneof![Just(increment()), Just(decrement()), Just(reset())]
}

fn list_id() -> impl Strategy<Value = ListId> {
    (0u128..3).prop_map(ListId::from_u128)
}

fn card_id() -> impl Strategy<Value = CardId> {
    (0u128..6).prop_map(CardId::from_u128)
}

fn title() -> impl Strategy<Value = String> {
    "[a-z]{0,8}"
}

fn board_action() -> impl Strategy<Value = BoardAction> {
    prop_oneof![
        (list_id(), title()).prop_map(|(list, t)| create_list(list, t)),
        (list_id(), title()).prop_map(|(list, t)| rename_list(list, t)),
        list_id().prop_map(remove_list),
        (card_id(), list_id(), title()).prop_map(|(card, list, t)| create_card(card, list, t, "")),
        (
            card_id(),
            proptest::option::of(title()),
            proptest::option::of(title())
        )
            .prop_map(|(card, t, d)| update_card(card, t, d)),
        card_id().prop_map(remove_card),
        (card_id(), list_id(), 0usize..5).prop_map(|(card, list, i)| move_card(card, list, i)),
    ]
}

fn unknown_kind(known: &'static [&'static str]) -> impl Strategy<Value = String> {
    "[A-Z_]{1,12}".prop_filter("must not be a known tag", move |kind| {
        !known.contains(&kind.as_str())
    })
}

fn run_counter(start: CounterState, actions: &[CounterAction]) -> CounterState {
    actions
        .iter()
        .fold(start, |state, action| counter_reducer(&state, action))
}

fn run_board(actions: &[BoardAction]) -> Vec<BoardState> {
    let reducer = board_reducer();
    let mut state = BoardState::default();
    let mut states = Vec::with_capacity(actions.len());
    for action in actions {
        state = reducer.reduce(&state, action);
        states.push(state.clone());
    }
    states
}

proptest! {
    #[test]
    fn unknown_json_action_is_identity(
        count in -1_000i64..1_000,
        kind in unknown_kind(CounterAction::KINDS),
    ) {
        let store = StoreBuilder::<CounterState, CounterAction>::new()
            .initial(CounterState { count })
            .reducer(counter_reducer)
            .build()
            .unwrap();

        let notified = Rc::new(Cell::new(0));
        let sink = Rc::clone(&notified);
        let _subscription = store.subscribe(move |_| sink.set(sink.get() + 1));

        let result = store.dispatch_json(&serde_json::json!({"kind": kind}));

        prop_assert!(result.is_ok());
        prop_assert_eq!(*store.get_state(), CounterState { count });
        prop_assert_eq!(notified.get(), 1);
    }

    #[test]
    fn unknown_board_action_is_identity(
        actions in prop::collection::vec(board_action(), 0..20),
        kind in unknown_kind(BoardAction::KINDS),
    ) {
        let store = unistore::apps::kanban::store();
        for action in actions {
            store.dispatch(action);
        }
        let before = store.get_state();

        store
            .dispatch_json(&serde_json::json!({"kind": kind, "payload": null}))
            .unwrap();

        prop_assert_eq!(&*store.get_state(), &*before);
    }

    #[test]
    fn counter_reducer_is_deterministic(
        count in any::<i64>(),
        actions in prop::collection::vec(counter_action(), 0..50),
    ) {
        let start = CounterState { count };
        prop_assert_eq!(run_counter(start, &actions), run_counter(start, &actions));
    }

    #[test]
    fn increment_then_decrement_is_identity(count in -1_000_000_000i64..1_000_000_000) {
        let start = CounterState { count };
        prop_assert_eq!(run_counter(start, &[increment(), decrement()]), start);
        prop_assert_eq!(run_counter(start, &[decrement(), increment()]), start);
    }

    #[test]
    fn reset_absorbs_history(
        count in any::<i64>(),
        actions in prop::collection::vec(counter_action(), 0..50),
    ) {
        let mut actions = actions;
        actions.push(reset());
        prop_assert_eq!(run_counter(CounterState { count }, &actions), CounterState { count: 0 });
    }

    #[test]
    fn store_matches_plain_fold(actions in prop::collection::vec(counter_action(), 0..50)) {
        let store = unistore::apps::counter::store();
        for action in actions.iter().cloned() {
            store.dispatch(action);
        }
        prop_assert_eq!(*store.get_state(), run_counter(CounterState::default(), &actions));
    }

    #[test]
    fn board_reducer_preserves_consistency(
        actions in prop::collection::vec(board_action(), 0..60),
    ) {
        for state in run_board(&actions) {
            prop_assert!(state.is_consistent(), "violations: {:?}", state.violations());
        }
    }

    #[test]
    fn board_reducer_is_deterministic(actions in prop::collection::vec(board_action(), 0..40)) {
        prop_assert_eq!(run_board(&actions), run_board(&actions));
    }

    #[test]
    fn lists_slice_ignores_card_edits(
        actions in prop::collection::vec(board_action(), 0..30),
        edit in (card_id(), proptest::option::of(title()), proptest::option::of(title())),
    ) {
        let lists = run_board(&actions)
            .pop()
            .map(|board| board.lists)
            .unwrap_or_default();
        let (card, t, d) = edit;
        prop_assert_eq!(lists_reducer(&lists, &update_card(card, t, d)), lists);
    }

    #[test]
    fn cards_slice_ignores_list_titles(
        actions in prop::collection::vec(board_action(), 0..30),
        list in list_id(),
        t in title(),
    ) {
        let cards = run_board(&actions)
            .pop()
            .map(|board| board.cards)
            .unwrap_or_default();
        prop_assert_eq!(cards_reducer(&cards, &create_list(list, t.clone())), cards.clone());
        prop_assert_eq!(cards_reducer(&cards, &rename_list(list, t)), cards);
    }

    #[test]
    fn bounded_history_never_exceeds_limit(
        limit in 1usize..8,
        actions in prop::collection::vec(counter_action(), 0..30),
    ) {
        let store = StoreBuilder::<CounterState, CounterAction>::new()
            .initial(CounterState::default())
            .reducer(counter_reducer)
            .record_history(true)
            .history_limit(limit)
            .build()
            .unwrap();

        for action in actions.iter().cloned() {
            store.dispatch(action);
        }

        let history = store.history().unwrap();
        prop_assert_eq!(history.len(), actions.len().min(limit));
        if let Some(last) = history.last() {
            prop_assert_eq!(&last.to, &*store.get_state());
        }
    }

    #[test]
    fn board_state_roundtrip_serialization(
        actions in prop::collection::vec(board_action(), 0..30),
    ) {
        let board = run_board(&actions).pop().unwrap_or_default();
        let json = serde_json::to_string(&board).unwrap();
        let restored: BoardState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, board);
    }
}

#[test]
fn empty_slices_default_to_empty() {
    assert!(ListsState::default().is_empty());
    assert!(CardsState::default().is_empty());
}
