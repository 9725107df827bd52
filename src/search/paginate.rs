//! Newest-first pagination
//!
//! The page number is not checked against the page count. Asking for a page
//! past the end yields an empty slice; callers reset to page 1 whenever the
//! filtered set changes.

/// One page of results plus the total page count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, newest first
    pub items: Vec<T>,
    /// The requested page number (1-based)
    pub number: usize,
    /// Total number of pages for the whole result set
    pub total_pages: usize,
}

/// A single pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: usize,
    /// The current page's control is disabled
    pub disabled: bool,
}

impl<T> Page<T> {
    /// Pagination controls, or `None` when there is at most one page
    ///
    /// A single page gets no control at all rather than a disabled one.
    #[must_use]
    pub fn controls(&self) -> Option<Vec<PageControl>> {
        if self.total_pages <= 1 {
            return None;
        }
        Some(
            (1..=self.total_pages)
                .map(|number| PageControl {
                    number,
                    disabled: number == self.number,
                })
                .collect(),
        )
    }

    /// Whether this page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Number of pages needed for `count` items
#[must_use]
pub const fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice `records` into the `page_number`-th page of `page_size`, newest first
///
/// The input is in insertion order; it is reversed before slicing.
#[must_use]
pub fn paginate<T: Clone>(records: &[T], page_size: usize, page_number: usize) -> Page<T> {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    let items = records
        .iter()
        .rev()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        number: page_number,
        total_pages: total_pages(records.len(), page_size),
    }
}
