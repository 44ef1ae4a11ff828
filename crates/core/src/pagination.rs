//! Page math and page state
//!
//! Pure functions for slicing a result list into fixed-size pages, plus
//! [`Pager`], the owned page-state value the shell mutates through explicit
//! page-change operations.

/// How many page links to show on each side of the active page.
pub const LINK_SPAN: usize = 2;

/// Total number of pages for `total_items` items at `per_page` items per page.
///
/// An empty result list has zero pages.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page)
}

/// Clamp a requested page number into `[1, total]`.
///
/// With zero pages there is nothing to show; the clamped value is still 1 so
/// that window math below yields an empty slice.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.max(1).min(total.max(1))
}

/// Calculate the window bounds for a given page.
///
/// Returns `(start_index, end_index)` for slicing the items array. The range
/// is clipped to the available items, so an out-of-range page or an empty
/// list yields an empty window rather than an error.
pub fn page_bounds(total_items: usize, page: usize, per_page: usize) -> (usize, usize) {
    let start = (clamp_page(page, total_pages(total_items, per_page)) - 1) * per_page;
    let start = start.min(total_items);
    let end = (start + per_page).min(total_items);
    (start, end)
}

/// The sliding window of numbered page links around the current page.
///
/// Up to [`LINK_SPAN`] links on each side of `current`, clipped to
/// `[1, total]`. No links render when there are no pages.
pub fn link_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total);
    let first = current.saturating_sub(LINK_SPAN).max(1);
    let last = (current + LINK_SPAN).min(total);
    (first..=last).collect()
}

/// Owned page state.
///
/// The current page is 1-indexed and always within `[1, total_pages]`; pages
/// 1 and `total_pages` are absorbing boundaries for [`Pager::prev`] and
/// [`Pager::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    total: usize,
}

impl Pager {
    /// A pager positioned on page 1 for a list of `total_items` items.
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            current: 1,
            total: total_pages(total_items, per_page),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to a specific page, clamped into range.
    pub fn goto(&mut self, page: usize) {
        self.current = clamp_page(page, self.total);
    }

    /// Advance one page. Returns `false` (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back one page. Returns `false` (and stays put) on page 1.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// The numbered links to render around the current page.
    pub fn links(&self) -> Vec<usize> {
        link_window(self.current, self.total)
    }
}
