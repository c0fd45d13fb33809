//! Listing pages and the infinite-scroll feed that accumulates them.

use serde::{Deserialize, Serialize};

use crate::casting::has_more;

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage<T> {
    pub items: Vec<T>,
    /// Cursor to request next. Always `page + 1`, even on the last page,
    /// saturating at `i64::MAX`.
    pub next_page: i64,
    /// `true` when this page was full. Approximate: see [`has_more`].
    pub has_more: bool,
}

impl<T> ListingPage<T> {
    /// Wrap the rows returned for `page`.
    pub fn from_rows(page: i64, items: Vec<T>) -> Self {
        let has_more = has_more(items.len());
        Self {
            items,
            next_page: page.max(0).saturating_add(1),
            has_more,
        }
    }
}

/// Client-side accumulation of listing pages.
///
/// Pages are appended in arrival order. There is no de-duplication or
/// re-sorting across pages; changing a filter means starting a new feed.
#[derive(Debug, Clone)]
pub struct ListingFeed<T> {
    items: Vec<T>,
    next_page: i64,
    exhausted: bool,
}

impl<T> Default for ListingFeed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page: 0,
            exhausted: false,
        }
    }
}

impl<T> ListingFeed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor of the next page to request, or `None` once exhausted.
    pub fn next_page(&self) -> Option<i64> {
        (!self.exhausted).then_some(self.next_page)
    }

    /// Append a page. Returns the number of items added.
    pub fn push_page(&mut self, page: ListingPage<T>) -> usize {
        let added = page.items.len();
        self.items.extend(page.items);
        self.next_page = page.next_page;
        self.exhausted = !page.has_more;
        added
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
