//! Sample entities and pre-wired servers.

use crate::server::InMemoryApi;
use chrono::{DateTime, TimeZone, Utc};
use entistate_models::{Doer, Todo, TodoId};

/// The thirteen sample doers used across table scenarios.
pub fn sample_doers() -> Vec<Doer> {
    let names: [(u64, &str, &str, u32); 13] = [
        (1, "Alice", "Smith", 5),
        (2, "Bob", "Johnson", 3),
        (3, "Charlie", "Brown", 8),
        (4, "Diana", "Prince", 2),
        (5, "Edward", "Hyde", 0),
        (6, "Fiona", "Gallagher", 12),
        (7, "George", "Jetson", 1),
        (8, "Helen", "Troy", 4),
        (9, "Ivan", "Drago", 6),
        (10, "Jane", "Doe", 7),
        (11, "Kyle", "Broflovski", 9),
        (12, "Laura", "Palmer", 0),
        (13, "Mike", "Wheeler", 3),
    ];
    names
        .into_iter()
        .map(|(id, first_name, last_name, total_todos)| Doer {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            total_todos,
        })
        .collect()
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// A handful of sample todos with distinct creation times.
pub fn sample_todos() -> Vec<Todo> {
    let rows: [(&str, &str, &str, i64, u64); 4] = [
        ("t-3", "ship release", "tag and publish", 1_700_000_300, 1),
        ("t-1", "write docs", "cover the adapter", 1_700_000_100, 1),
        ("t-4", "fix flaky test", "pagination clamp", 1_700_000_400, 2),
        ("t-2", "review patch", "doer form", 1_700_000_200, 3),
    ];
    rows.into_iter()
        .map(|(id, name, description, created, doer_id)| Todo {
            id: TodoId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            status: "open".to_string(),
            created_at: at(created),
            updated_at: at(created),
            doer_id,
        })
        .collect()
}

/// An in-memory doers resource seeded with `doers`.
pub fn doer_api(doers: &[Doer]) -> InMemoryApi {
    let api = InMemoryApi::new("http://testkit/api/doers");
    api.seed_entities(doers);
    api
}

/// An in-memory todos resource seeded with `todos`.
pub fn todo_api(todos: &[Todo]) -> InMemoryApi {
    let api = InMemoryApi::new("http://testkit/api/todos")
        .with_text_ids()
        .with_timestamps();
    api.seed_entities(todos);
    api
}
