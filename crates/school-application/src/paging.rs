//! Page request normalisation
//!
//! Query services never hand raw page requests to a repository: a page
//! number below 1 becomes 1, and the page size is clamped into
//! `1..=max_page_size` with 0 replaced by the default.

/// Default rows per page when a request does not say
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on rows per page
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size limits applied by the query services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingPolicy {
    default_page_size: u32,
    max_page_size: u32,
}

impl PagingPolicy {
    /// Create a policy; a zero default falls back to [`DEFAULT_PAGE_SIZE`] and
    /// a maximum below the default is raised to it
    pub fn new(default_page_size: u32, max_page_size: u32) -> Self {
        let default_page_size = if default_page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            default_page_size
        };
        Self {
            default_page_size,
            max_page_size: max_page_size.max(default_page_size),
        }
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Normalise a `(page_number, page_size)` request
    ///
    /// # Example
    ///
    /// ```
    /// use school_application::PagingPolicy;
    ///
    /// let policy = PagingPolicy::new(10, 50);
    /// assert_eq!(policy.normalize(0, 0), (1, 10));
    /// assert_eq!(policy.normalize(3, 500), (3, 50));
    /// ```
    pub fn normalize(&self, page_number: u32, page_size: u32) -> (u32, u32) {
        let page_number = page_number.max(1);
        let page_size = match page_size {
            0 => self.default_page_size,
            size => size.min(self.max_page_size),
        };
        (page_number, page_size)
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}
