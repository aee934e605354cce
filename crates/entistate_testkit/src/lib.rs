//! # entistate Testkit
//!
//! Test utilities for entistate:
//! - [`InMemoryApi`]: a loopback REST server implementing the store's
//!   [`HttpClient`](entistate_store::HttpClient) trait, with failure
//!   injection
//! - Fixtures: sample doers and todos
//! - Property-based generators using proptest

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod fixtures;
mod generators;
mod server;

pub use fixtures::{doer_api, sample_doers, sample_todos, todo_api};
pub use generators::{doer_strategy, doers_strategy, todo_strategy, todos_strategy};
pub use server::{IdKind, InMemoryApi};
