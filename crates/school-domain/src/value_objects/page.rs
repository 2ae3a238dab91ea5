//! Paged search results
//!
//! Every repository search returns a [`Page`]. Existence probes only look at
//! [`Page::has_any`]; the page contents are irrelevant to them.

use serde::{Deserialize, Serialize};

/// One page of search results
///
/// # Example
///
/// ```
/// use school_domain::value_objects::Page;
///
/// let page = Page::new(vec!["Lincoln High"], 3, 1, 1);
/// assert!(page.has_any());
/// assert_eq!(page.data.len(), 1);
/// assert_eq!(page.total_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Number of matches across all pages
    pub total_count: u64,

    /// 1-based page number that was requested
    pub page_number: u32,

    /// Requested page size
    pub page_size: u32,

    /// Matches on this page, in store order
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Create a new page
    pub fn new(data: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        Self {
            total_count,
            page_number,
            page_size,
            data,
        }
    }

    /// Create a page with no matches
    pub fn empty(page_number: u32, page_size: u32) -> Self {
        Self::new(Vec::new(), 0, page_number, page_size)
    }

    /// Whether the search matched anything at all
    pub fn has_any(&self) -> bool {
        self.total_count > 0
    }

    /// Map the page contents, keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
