//! Pagination envelope shared by all list endpoints.
//!
//! A [`Page`] is the raw shape a page-returning reader query produces; the
//! adapter knows nothing about how it was built (SQL, in-memory, ...).
//! [`paginate`] wraps it into the response envelope the admin client
//! consumes, with `-1` sentinels for missing neighbour pages.

use serde::Serialize;

/// One page of raw items as returned by a reader port.
///
/// `page_number` is zero-based.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Total number of pages for this result set.
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.page_size as u64) as u32
    }
}

/// Response envelope for paginated list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<U> {
    /// Zero-based number of the next page, or `-1` if this is the last page.
    pub next_page_num: i64,
    /// Zero-based number of the previous page, or `-1` if this is the first.
    pub previous_page_num: i64,
    /// Total number of matching items across all pages.
    pub total_num: u64,
    pub results: Vec<U>,
}

/// Wraps a backend page into the response envelope, mapping every raw item
/// through `map`.
pub fn paginate<T, U>(page: Page<T>, map: impl Fn(T) -> U) -> Paginated<U> {
    let total_pages = i64::from(page.total_pages());
    let page_number = i64::from(page.page_number);

    let next_page_num = if page_number + 1 >= total_pages {
        -1
    } else {
        (page_number + 1).min(total_pages - 1)
    };
    let previous_page_num = if page_number - 1 < 0 {
        -1
    } else {
        page_number - 1
    };

    Paginated {
        next_page_num,
        previous_page_num,
        total_num: page.total_items,
        results: page.items.into_iter().map(map).collect(),
    }
}
