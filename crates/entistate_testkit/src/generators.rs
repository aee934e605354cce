//! Property-based test generators using proptest.

use chrono::{TimeZone, Utc};
use entistate_models::{Doer, Todo, TodoId};
use proptest::prelude::*;

/// Strategy for a doer with a bounded id, plausible names and todo count.
pub fn doer_strategy() -> impl Strategy<Value = Doer> {
    (
        1u64..1000,
        "[A-Z][a-z]{1,12}",
        "[A-Z][a-z]{1,12}",
        0u32..50,
    )
        .prop_map(|(id, first_name, last_name, total_todos)| Doer {
            id,
            first_name,
            last_name,
            total_todos,
        })
}

/// Strategy for a batch of doers with unique ids.
pub fn doers_strategy(max: usize) -> impl Strategy<Value = Vec<Doer>> {
    prop::collection::vec(doer_strategy(), 0..max).prop_map(|mut doers| {
        doers.sort_by_key(|d| d.id);
        doers.dedup_by_key(|d| d.id);
        doers
    })
}

/// Strategy for a todo with a text id and a bounded creation time.
pub fn todo_strategy() -> impl Strategy<Value = Todo> {
    (
        "[a-z0-9]{8}",
        "[a-z ]{1,20}",
        "[a-z ]{0,40}",
        prop_oneof![Just("open"), Just("in-progress"), Just("done")],
        0i64..2_000_000_000,
        1u64..100,
    )
        .prop_map(|(id, name, description, status, created, doer_id)| {
            let created_at = Utc.timestamp_opt(created, 0).unwrap();
            Todo {
                id: TodoId::from(id.as_str()),
                name,
                description,
                status: status.to_string(),
                created_at,
                updated_at: created_at,
                doer_id,
            }
        })
}

/// Strategy for a batch of todos with unique ids.
pub fn todos_strategy(max: usize) -> impl Strategy<Value = Vec<Todo>> {
    prop::collection::vec(todo_strategy(), 0..max).prop_map(|mut todos| {
        todos.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        todos.dedup_by(|a, b| a.id == b.id);
        todos
    })
}
