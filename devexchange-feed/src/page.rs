use serde::{Deserialize, Serialize};

/// One page of a composed feed plus its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage<T> {
    /// The records on this page, at most `page_size` of them.
    pub items: Vec<T>,
    /// The 1-based page actually served (the request is clamped).
    pub page: usize,
    /// Total pages for the filtered collection; at least 1.
    pub total_pages: usize,
    /// Total records after filtering, across all pages.
    pub total: usize,
}

/// Slices one page out of a filtered, sorted collection.
///
/// `total_pages` is `ceil(len / page_size)` with a floor of 1, so an
/// empty collection still reports one (empty) page. The requested page is
/// clamped into `[1, total_pages]`.
#[must_use]
pub fn page_window<T>(items: Vec<T>, page: usize, page_size: usize) -> FeedPage<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;

    let items: Vec<T> = items.into_iter().skip(start).take(page_size).collect();
    FeedPage {
        items,
        page,
        total_pages,
        total,
    }
}
