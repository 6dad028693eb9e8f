//! Pagination
//!
//! Fixed-size page windows over the filtered view.

use crate::models::Post;

/// Cards shown per page.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `total` posts.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The visible window for a 1-based `page`.
///
/// Selector buttons are only ever generated for valid page numbers, so
/// an out-of-range page simply yields an empty slice.
pub fn page_slice(posts: &[Post], page: usize) -> &[Post] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= posts.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(posts.len());
    &posts[start..end]
}
