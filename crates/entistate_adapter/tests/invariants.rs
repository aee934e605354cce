//! Property-based invariant tests for the adapter.
//!
//! Applies arbitrary operation sequences and checks that every reachable
//! collection keeps its id list and entity map consistent, and stays
//! sorted when a comparator is configured.

use entistate_adapter::{Entity, EntityAdapter, EntityState, Patch};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u8,
    rank: i32,
}

impl Entity for Item {
    type Id = u8;

    fn id(&self) -> u8 {
        self.id
    }
}

#[derive(Debug, Clone)]
struct RankPatch(Option<i32>);

impl Patch<Item> for RankPatch {
    fn apply(&self, target: &mut Item) {
        if let Some(rank) = self.0 {
            target.rank = rank;
        }
    }
}

#[derive(Debug, Clone)]
enum Op {
    AddOne(Item),
    AddMany(Vec<Item>),
    SetAll(Vec<Item>),
    SetOne(Item),
    SetMany(Vec<Item>),
    RemoveOne(u8),
    RemoveMany(Vec<u8>),
    RemoveAll,
    UpdateOne(u8, RankPatch),
    UpsertOne(Item),
}

fn item_strategy() -> impl Strategy<Value = Item> {
    (0u8..16, any::<i32>()).prop_map(|(id, rank)| Item { id, rank })
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(item_strategy(), 0..8)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        item_strategy().prop_map(Op::AddOne),
        items_strategy().prop_map(Op::AddMany),
        items_strategy().prop_map(Op::SetAll),
        item_strategy().prop_map(Op::SetOne),
        items_strategy().prop_map(Op::SetMany),
        (0u8..16).prop_map(Op::RemoveOne),
        prop::collection::vec(0u8..16, 0..8).prop_map(Op::RemoveMany),
        Just(Op::RemoveAll),
        (0u8..16, prop::option::of(any::<i32>()))
            .prop_map(|(id, rank)| Op::UpdateOne(id, RankPatch(rank))),
        item_strategy().prop_map(Op::UpsertOne),
    ]
}

fn apply(adapter: &EntityAdapter<Item>, state: &EntityState<Item>, op: Op) -> EntityState<Item> {
    match op {
        Op::AddOne(item) => adapter.add_one(state, item),
        Op::AddMany(items) => adapter.add_many(state, items),
        Op::SetAll(items) => adapter.set_all(items),
        Op::SetOne(item) => adapter.set_one(state, item),
        Op::SetMany(items) => adapter.set_many(state, items),
        Op::RemoveOne(id) => adapter.remove_one(state, &id),
        Op::RemoveMany(ids) => adapter.remove_many(state, &ids),
        Op::RemoveAll => adapter.remove_all(),
        Op::UpdateOne(id, patch) => adapter.update_one(state, &id, &patch),
        Op::UpsertOne(item) => adapter.upsert_one(state, item),
    }
}

/// Id list and entity map must describe the same id set, with no
/// duplicate ids.
fn check_consistency(state: &EntityState<Item>) {
    let ids = state.select_ids();
    let unique: HashSet<u8> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
    for id in ids {
        assert!(state.select_by_id(id).is_some(), "id {id} has no entity");
    }
    assert_eq!(state.select_total(), ids.len());
    assert_eq!(state.select_total(), state.select_all().len());
}

fn check_sorted(state: &EntityState<Item>) {
    let all = state.select_all();
    for pair in all.windows(2) {
        assert!(
            pair[0].rank <= pair[1].rank,
            "collection out of order: {:?}",
            state.select_ids()
        );
    }
}

proptest! {
    #[test]
    fn sorted_adapter_keeps_invariants(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let adapter = EntityAdapter::with_sort_comparer(|a: &Item, b: &Item| a.rank.cmp(&b.rank));
        let mut state = adapter.initial();
        for op in ops {
            state = apply(&adapter, &state, op);
            check_consistency(&state);
            check_sorted(&state);
        }
    }

    #[test]
    fn unsorted_adapter_keeps_invariants(ops in prop::collection::vec(op_strategy(), 0..32)) {
        let adapter = EntityAdapter::new();
        let mut state = adapter.initial();
        for op in ops {
            state = apply(&adapter, &state, op);
            check_consistency(&state);
        }
    }

    #[test]
    fn operations_never_mutate_their_input(op in op_strategy(), seed in items_strategy()) {
        let adapter = EntityAdapter::with_sort_comparer(|a: &Item, b: &Item| a.rank.cmp(&b.rank));
        let state = adapter.set_all(seed);
        let snapshot = state.clone();
        let _ = apply(&adapter, &state, op);
        prop_assert_eq!(state, snapshot);
    }
}
