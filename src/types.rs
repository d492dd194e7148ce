//! Core data types shared across the collector
//!
//! A [`Page`] is what one fetch returns, a [`RawComment`] is one entry of a
//! page, and a [`ResultSet`] is the ordered list of [`FilteredComment`]s a
//! whole run produces.

use serde::{Deserialize, Serialize};

/// Base URL relative permalinks are joined onto
pub const DEFAULT_PERMALINK_BASE: &str = "https://reddit.com";

// ============================================================================
// Raw Comments
// ============================================================================

/// A comment as returned by the source API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComment {
    id: String,
    body: Option<String>,
    permalink: Option<String>,
}

impl RawComment {
    /// Create a comment, joining a relative permalink onto `permalink_base`
    pub fn new(
        id: impl Into<String>,
        body: Option<String>,
        permalink: Option<&str>,
        permalink_base: &str,
    ) -> Self {
        let permalink = permalink.map(|path| absolute_permalink(permalink_base, path));
        Self {
            id: id.into(),
            body,
            permalink,
        }
    }

    /// Comment identifier (empty if the source omitted it)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Comment text, if the source provided one
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Absolute link to the comment
    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }
}

fn absolute_permalink(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

// ============================================================================
// Pages
// ============================================================================

/// One fetched page of comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    comments: Vec<RawComment>,
    after: Option<String>,
}

impl Page {
    /// Create a page from its comments and the cursor of the next page
    pub fn new(comments: Vec<RawComment>, after: Option<String>) -> Self {
        Self { comments, after }
    }

    /// Comments in source order
    pub fn comments(&self) -> &[RawComment] {
        &self.comments
    }

    /// Cursor of the next page, `None` on the last page
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    /// Split the page into its comments and cursor
    pub fn into_parts(self) -> (Vec<RawComment>, Option<String>) {
        (self.comments, self.after)
    }
}

// ============================================================================
// Filtered Output
// ============================================================================

/// A comment that passed the content filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredComment {
    /// Absolute link to the comment
    pub uri: Option<String>,
    /// Comment text
    pub body: String,
}

impl FilteredComment {
    /// Build the output entry for a matching raw comment
    pub fn from_raw(comment: &RawComment, body: &str) -> Self {
        Self {
            uri: comment.permalink.clone(),
            body: body.to_string(),
        }
    }
}

/// Ordered results of a complete collection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<FilteredComment>);

impl ResultSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, comments: impl IntoIterator<Item = FilteredComment>) {
        self.0.extend(comments);
    }

    /// All results in collection order
    pub fn as_slice(&self) -> &[FilteredComment] {
        &self.0
    }

    /// Iterate over the results in collection order
    pub fn iter(&self) -> std::slice::Iter<'_, FilteredComment> {
        self.0.iter()
    }

    /// Number of results
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take ownership of the results
    pub fn into_vec(self) -> Vec<FilteredComment> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FilteredComment;
    type IntoIter = std::slice::Iter<'a, FilteredComment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
