//! # entistate Adapter
//!
//! Generic adapter for normalized entity collections.
//!
//! A normalized collection stores an ordered list of unique ids next to a
//! map from id to entity, so an entity is held exactly once no matter how
//! many views render it. This crate provides:
//! - The [`Entity`] and [`Patch`] traits
//! - The [`EntityState`] collection value with its selectors
//! - The [`EntityAdapter`] factory of pure collection operations
//!
//! ## Key Invariants
//!
//! - The key set of the entity map always equals the id list (no duplicate
//!   ids, no orphan entities)
//! - With a sort comparator configured, the id list is always sorted by
//!   that comparator; otherwise insertion order is preserved
//! - Every operation returns a new collection value; inputs are never
//!   mutated, so callers may keep old values around unchanged

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod adapter;
mod entity;
mod state;

pub use adapter::{EntityAdapter, SortComparer};
pub use entity::{Entity, Patch};
pub use state::EntityState;
