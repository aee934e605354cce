//! Render-ready table views.

use crate::paginate::Pager;
use crate::sort::{SortKey, SortState};

/// What a table renders for the current sort and page.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<'a, T> {
    /// No rows at all: render a "no entities" message, no table, no
    /// pagination controls.
    Empty,
    /// One page of rows plus pagination metadata.
    Page {
        /// The rows of the current page, in display order.
        rows: &'a [T],
        /// 1-based page index.
        page: usize,
        /// Total number of pages.
        total_pages: usize,
        /// Whether a previous page exists.
        has_prev: bool,
        /// Whether a next page exists.
        has_next: bool,
    },
}

/// A sortable, paginated row collection.
///
/// Owns the display rows, the click-to-sort state and the pager, and
/// keeps them consistent: replacing the rows re-applies the sort and
/// re-clamps the page index; clicking a header changes the order but
/// leaves the pinned page index alone.
#[derive(Debug, Clone)]
pub struct DataTable<T, K> {
    rows: Vec<T>,
    sort: Option<SortState<K>>,
    pager: Pager,
}

impl<T, K: SortKey<T>> DataTable<T, K> {
    /// Creates an empty table with the default page size.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            pager: Pager::new(),
        }
    }

    /// Creates an empty table with a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            sort: None,
            pager: Pager::with_page_size(page_size),
        }
    }

    /// Replaces the rows, re-applying the current sort and re-clamping
    /// the page index against the new length.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        if let Some(sort) = &self.sort {
            sort.sort(&mut self.rows);
        }
        self.pager.clamp(self.rows.len());
    }

    /// Returns all rows in display order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Returns the current sort state, if any column was clicked yet.
    pub fn sort(&self) -> Option<&SortState<K>> {
        self.sort.as_ref()
    }

    /// Returns the pager.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Handles a click on a column header.
    ///
    /// The page index is left where the caller pinned it.
    pub fn click_header(&mut self, key: K) {
        match &mut self.sort {
            Some(sort) => sort.click(key),
            None => self.sort = Some(SortState::new(key)),
        }
        if let Some(sort) = &self.sort {
            sort.sort(&mut self.rows);
        }
    }

    /// Moves to the next page.
    pub fn next_page(&mut self) {
        self.pager.next(self.rows.len());
    }

    /// Moves to the previous page.
    pub fn prev_page(&mut self) {
        self.pager.prev(self.rows.len());
    }

    /// Moves to `page`, clamped.
    pub fn set_page(&mut self, page: usize) {
        self.pager.set_page(page, self.rows.len());
    }

    /// Produces the view for the current sort and page.
    pub fn view(&self) -> TableView<'_, T> {
        if self.rows.is_empty() {
            return TableView::Empty;
        }
        let total = self.rows.len();
        TableView::Page {
            rows: self.pager.slice(&self.rows),
            page: self.pager.page(),
            total_pages: self.pager.total_pages(total),
            has_prev: self.pager.has_prev(),
            has_next: self.pager.has_next(total),
        }
    }
}

impl<T, K: SortKey<T>> Default for DataTable<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
