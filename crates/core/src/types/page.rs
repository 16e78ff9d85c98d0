//! Pagination math shared by every list screen.

/// Pagination state for a paginated list.
///
/// Pages are 1-indexed. `total` is the server-reported row count; the page
/// size is fixed per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Rows per page.
    pub limit: u32,
    /// Total rows across all pages, as reported by the server.
    pub total: u64,
}

impl Pagination {
    /// Create pagination state.
    #[must_use]
    pub const fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total }
    }

    /// Number of pages: `ceil(total / limit)`, never less than one.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.limit as u64);
        if pages == 0 { 1 } else { pages }
    }

    /// Whether the "previous page" control is enabled.
    #[must_use]
    pub const fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether the "next page" control is enabled.
    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        (self.page as u64) < self.total_pages()
    }
}
