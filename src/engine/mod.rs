//! Execution engine module
//!
//! The collection loop and the page fetchers it drives.
//!
//! # Overview
//!
//! The engine module provides:
//! - `PageFetcher` - One request, one decoded page
//! - `ListingFetcher` - `PageFetcher` backed by the HTTP listing endpoint
//! - `CommentCollector` - Follows the cursor across every page and keeps the
//!   comments that pass the content filter

mod fetcher;
mod types;

pub use fetcher::{ListingFetcher, PageFetcher};
pub use types::{CollectConfig, CollectStats};

use crate::error::Result;
use crate::filter::ContentFilter;
use crate::pagination::PaginationState;
use crate::types::{FilteredComment, RawComment, ResultSet};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Collects every matching comment of a user
pub struct CommentCollector<F> {
    /// Page source
    fetcher: F,
    /// Content filter
    filter: ContentFilter,
    /// Collection configuration
    config: CollectConfig,
}

impl<F: PageFetcher> CommentCollector<F> {
    /// Create a collector with the YouTube filter and no page cap
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            filter: ContentFilter::youtube(),
            config: CollectConfig::default(),
        }
    }

    /// Set the content filter
    #[must_use]
    pub fn with_filter(mut self, filter: ContentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set collection configuration
    #[must_use]
    pub fn with_config(mut self, config: CollectConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the page fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Collect all matching comments of `username`
    pub async fn collect_all(&self, username: &str) -> Result<ResultSet> {
        let (results, _) = self.collect_all_with_stats(username).await?;
        Ok(results)
    }

    /// Collect all matching comments of `username`, with run statistics
    ///
    /// Any fetch error aborts the run; nothing collected so far is returned.
    pub async fn collect_all_with_stats(
        &self,
        username: &str,
    ) -> Result<(ResultSet, CollectStats)> {
        let start = Instant::now();
        let mut stats = CollectStats::new();
        let mut results = ResultSet::new();
        let mut state = PaginationState::new();

        info!("Collecting comments for user: {username}");

        while !state.is_done() {
            let page = self.fetcher.fetch(username, state.cursor()).await?;
            let (comments, after) = page.into_parts();

            let matched: Vec<FilteredComment> =
                comments.iter().filter_map(|c| self.filter_comment(c)).collect();

            stats.add_page(comments.len(), matched.len());
            debug!(
                "Page {}: {} comments, {} matched, next cursor: {:?}",
                stats.pages_fetched,
                comments.len(),
                matched.len(),
                after
            );

            results.extend(matched);
            state = state.advance(after);

            if let Some(max_pages) = self.config.max_pages {
                if !state.is_done() && stats.pages_fetched >= max_pages {
                    warn!("Stopping after {max_pages} pages (max_pages), more pages remain");
                    stats.truncated = true;
                    break;
                }
            }
        }

        stats.elapsed = start.elapsed();
        info!(
            "Collected {} of {} comments from {} pages in {:?}",
            stats.comments_matched, stats.comments_seen, stats.pages_fetched, stats.elapsed
        );

        Ok((results, stats))
    }

    fn filter_comment(&self, comment: &RawComment) -> Option<FilteredComment> {
        comment
            .body()
            .filter(|body| self.filter.matches(body))
            .map(|body| FilteredComment::from_raw(comment, body))
    }
}

#[cfg(test)]
mod tests;
