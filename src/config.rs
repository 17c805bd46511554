//! Configuration options for the DojoAdmin client

use std::time::Duration;

/// Configuration options for the DojoAdmin client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Quiet period before a header search query fires
    pub search_debounce: Duration,

    /// Minimum query length before a search is issued
    pub search_min_len: usize,

    /// Maximum number of search results shown in the panel
    pub search_display_limit: usize,

    /// Default page size for list views
    pub items_per_page: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            search_debounce: Duration::from_millis(300),
            search_min_len: 2,
            search_display_limit: 10,
            items_per_page: 10,
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the search debounce quiet period
    pub fn with_search_debounce(mut self, value: Duration) -> Self {
        self.search_debounce = value;
        self
    }

    /// Set the minimum search query length
    pub fn with_search_min_len(mut self, value: usize) -> Self {
        self.search_min_len = value;
        self
    }

    /// Set the search panel display limit
    pub fn with_search_display_limit(mut self, value: usize) -> Self {
        self.search_display_limit = value;
        self
    }

    /// Set the default list page size
    pub fn with_items_per_page(mut self, value: usize) -> Self {
        self.items_per_page = value;
        self
    }
}
