// SPDX-License-Identifier: MPL-2.0
//! Page arithmetic for the gallery grid.
//!
//! Pages are 1-based. Page `p` covers the half-open item range
//! `[(p - 1) * size, p * size)`, truncated to the item count.

use std::ops::Range;

/// Number of items shown per gallery page.
pub const PAGE_SIZE: usize = 12;

/// Page geometry for a list of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: usize,
    page_size: usize,
}

impl Pagination {
    /// Creates page geometry. A zero page size is treated as one.
    #[must_use]
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
        }
    }

    /// Page geometry with the gallery's fixed page size.
    #[must_use]
    pub fn gallery(total: usize) -> Self {
        Self::new(total, PAGE_SIZE)
    }

    /// Number of pages, `ceil(total / page_size)`. Zero when there are no items.
    #[must_use]
    pub fn page_count(self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Whether more than one page exists.
    #[must_use]
    pub fn is_paginated(self) -> bool {
        self.total > self.page_size
    }

    /// Clamps a requested page into `[1, page_count]`.
    ///
    /// With no items the only valid page is 1.
    #[must_use]
    pub fn clamp(self, page: usize) -> usize {
        page.clamp(1, self.page_count().max(1))
    }

    /// Item index range covered by `page` (clamped).
    #[must_use]
    pub fn range(self, page: usize) -> Range<usize> {
        let page = self.clamp(page);
        let start = ((page - 1) * self.page_size).min(self.total);
        let end = (page * self.page_size).min(self.total);
        start..end
    }

    /// Index of the first item on `page` (clamped).
    #[must_use]
    pub fn offset(self, page: usize) -> usize {
        self.range(page).start
    }
}
