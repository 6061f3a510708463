//! Result accumulation for paginated sessions.
//!
//! Pages are folded into the session's result list by plain concatenation:
//! arrival order is kept, duplicates across pages are kept, nothing is ever
//! reordered or truncated. The list is only cleared by replacing the session.

/// Appends `page` to `results`, preserving arrival order.
///
/// # Examples
///
/// ```
/// use tunesearch::app::accumulator::accumulate;
///
/// let results = accumulate(vec![1, 2], vec![2, 3]);
/// assert_eq!(results, vec![1, 2, 2, 3]);
/// ```
#[must_use]
pub fn accumulate<T>(mut results: Vec<T>, page: Vec<T>) -> Vec<T> {
    results.extend(page);
    results
}

/// Whether a page of `page_len` records leaves more results to fetch.
///
/// Only a completely full page counts; a short (or oversized) page ends the
/// session's pagination.
#[must_use]
pub const fn has_more_after(page_len: usize, page_size: usize) -> bool {
    page_len == page_size
}
