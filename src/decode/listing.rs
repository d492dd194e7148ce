//! Listing envelope decoding

use crate::error::{Error, Result};
use crate::types::{Page, RawComment, DEFAULT_PERMALINK_BASE};
use serde::Deserialize;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    after: Option<String>,
    children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
struct Thing {
    data: CommentData,
}

#[derive(Debug, Deserialize)]
struct CommentData {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    permalink: Option<String>,
}

// ============================================================================
// Decoder
// ============================================================================

/// Decoder for listing responses
#[derive(Debug, Clone)]
pub struct ListingDecoder {
    permalink_base: String,
}

impl Default for ListingDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_PERMALINK_BASE)
    }
}

impl ListingDecoder {
    /// Create a decoder joining permalinks onto `permalink_base`
    pub fn new(permalink_base: impl Into<String>) -> Self {
        Self {
            permalink_base: permalink_base.into(),
        }
    }

    /// Base URL used for permalinks
    pub fn permalink_base(&self) -> &str {
        &self.permalink_base
    }

    /// Decode a response body into a page
    pub fn decode(&self, body: &str) -> Result<Page> {
        let listing: Listing = serde_json::from_str(body)
            .map_err(|e| Error::malformed(format!("Failed to decode listing: {e}")))?;

        let comments = listing
            .data
            .children
            .into_iter()
            .map(|thing| {
                let data = thing.data;
                RawComment::new(
                    data.id.unwrap_or_default(),
                    data.body,
                    data.permalink.as_deref(),
                    &self.permalink_base,
                )
            })
            .collect();

        Ok(Page::new(comments, listing.data.after))
    }
}
