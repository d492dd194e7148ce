//! Engine types

use std::time::Duration;

/// Configuration for a collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectConfig {
    /// Stop after this many pages even if the listing reports more
    ///
    /// `None` follows the cursor until the source reports the last page.
    pub max_pages: Option<usize>,
}

impl CollectConfig {
    /// Create a config with no page cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit page cap
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

/// Statistics about a collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectStats {
    /// Total pages fetched
    pub pages_fetched: usize,
    /// Total comments seen across all pages
    pub comments_seen: usize,
    /// Comments that passed the content filter
    pub comments_matched: usize,
    /// Whether collection stopped at the page cap before the last page
    pub truncated: bool,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl CollectStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one processed page
    pub fn add_page(&mut self, seen: usize, matched: usize) {
        self.pages_fetched += 1;
        self.comments_seen += seen;
        self.comments_matched += matched;
    }
}
