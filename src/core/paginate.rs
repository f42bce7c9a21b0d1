//! Pagination over a filtered list.
//!
//! Pages are 1-based with a fixed page size. The derived total-page count is
//! `ceil(filtered_len / page_size)`; an empty list has zero pages and page 1
//! of it yields an empty slice without error.

/// Current page number and fixed page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Current page, 1-based
    pub page: usize,
    /// Fixed rows-per-page
    pub page_size: usize,
}

impl PageState {
    /// Starts at page 1 with the given page size.
    /// A zero page size is nonsensical and coerced to 1.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    /// Total pages for a filtered list of `len` records.
    #[must_use]
    pub const fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Resets to page 1. Triggered whenever any filter predicate changes.
    pub const fn reset(&mut self) {
        self.page = 1;
    }

    /// Clamps the current page to the last non-empty page of a list of
    /// `len` records. Used when the list itself shrinks (e.g. a deletion)
    /// so the view never lands on an out-of-range empty page.
    pub const fn clamp(&mut self, len: usize) {
        let total = self.total_pages(len);
        if self.page > total {
            self.page = if total == 0 { 1 } else { total };
        }
    }

    /// The slice of `rows` visible on the current page.
    #[must_use]
    pub fn slice<'a, R>(&self, rows: &'a [R]) -> &'a [R] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= rows.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(rows.len());
        &rows[start..end]
    }
}
