//! Fixed-size pagination with clamped page indexes.

/// Rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Tracks the current page over a collection of known size.
///
/// Pages are 1-based. The page index is clamped to `[1, total_pages]`;
/// with no rows there are no pages and the index rests at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    page: usize,
}

impl Pager {
    /// Creates a pager with the default page size, on page 1.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates a pager with a custom page size (minimum 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    /// Returns the current 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages for `total` rows.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Moves to `page`, clamped against `total` rows.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page;
        self.clamp(total);
    }

    /// Advances one page if there is one.
    pub fn next(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    /// Steps back one page if there is one.
    pub fn prev(&mut self, total: usize) {
        self.set_page(self.page.saturating_sub(1), total);
    }

    /// Re-clamps the page index after the collection changed size.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.clamp(1, self.total_pages(total).max(1));
    }

    /// Returns true if a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns true if a next page exists for `total` rows.
    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    /// Returns the current page's slice of `rows`.
    ///
    /// The index is clamped against the slice length without mutating
    /// the pager.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let page = self.page.clamp(1, self.total_pages(rows.len()).max(1));
        let start = (page - 1) * self.page_size;
        if start >= rows.len() {
            return &[];
        }
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
