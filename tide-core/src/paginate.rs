//! Fixed-size paging over the ordered day sequence.

/// Days per page: 2 columns x 5 rows in the dashboard grid.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A resolved page request: the clamped page index, total page count, and
/// the half-open slice bounds into the day sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub page: usize,
    pub page_count: usize,
    pub start: usize,
    pub end: usize,
}

/// Resolve a page request against a sequence of `len` days.
///
/// `page_count` is at least 1 even when the sequence is empty; the
/// requested index is clamped into `[0, page_count - 1]` rather than
/// wrapping or erroring. The last page may be shorter than `page_size`.
pub fn paginate(len: usize, requested_page: usize, page_size: usize) -> PageView {
    assert!(page_size >= 1, "page_size must be at least 1");
    let page_count = len.div_ceil(page_size).max(1);
    let page = requested_page.min(page_count - 1);
    let start = (page * page_size).min(len);
    let end = (start + page_size).min(len);
    PageView {
        page,
        page_count,
        start,
        end,
    }
}

/// Index of the last page — the default on load, since the most recent and
/// forecast days sort to the end of the sequence.
pub fn last_page(len: usize, page_size: usize) -> usize {
    paginate(len, usize::MAX, page_size).page
}
