//! # entistate Models
//!
//! Entity types for the doers-and-todos resource pair:
//! - [`Todo`] with its draft and patch types
//! - [`Doer`] with its draft, patch and sortable columns
//! - Form-level validation for doer names
//!
//! Entities serialize to the camelCase JSON the REST API speaks. Patches
//! are explicit structs of optional fields with a hand-written merge;
//! drafts are the create payloads without server-assigned fields.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod doer;
mod todo;
mod validate;

pub use doer::{Doer, DoerColumn, DoerDraft, DoerPatch};
pub use todo::{by_created_at, Todo, TodoDraft, TodoId, TodoPatch};
pub use validate::{ValidationError, NAME_LIMIT};
