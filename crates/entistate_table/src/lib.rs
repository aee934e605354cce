//! # entistate Table
//!
//! Deterministic ordering and slicing over a dynamic row collection.
//!
//! This crate provides:
//! - Click-to-sort state ([`SortState`]) with per-column comparison
//! - A fixed-size pager ([`Pager`]) with clamped page indexes
//! - A combined [`DataTable`] producing render-ready [`TableView`]s
//!
//! An empty collection yields a distinct [`TableView::Empty`] state
//! instead of an empty page with pagination controls.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod paginate;
mod sort;
mod view;

pub use paginate::{Pager, DEFAULT_PAGE_SIZE};
pub use sort::{SortDirection, SortKey, SortState};
pub use view::{DataTable, TableView};
