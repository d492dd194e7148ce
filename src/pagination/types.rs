//! Pagination state

/// Where a cursor-paginated listing currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationState {
    /// Another page must be fetched, starting from `cursor` (`None` for the first page)
    Fetching {
        /// Cursor to send with the next request
        cursor: Option<String>,
    },
    /// The last page has been processed
    Done,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationState {
    /// State before the first request
    pub fn new() -> Self {
        Self::Fetching { cursor: None }
    }

    /// Cursor for the next request, if one is pending
    pub fn cursor(&self) -> Option<&str> {
        match self {
            Self::Fetching { cursor } => cursor.as_deref(),
            Self::Done => None,
        }
    }

    /// Check if pagination is complete
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Move to the state implied by the cursor a response reported
    ///
    /// A missing or empty cursor ends pagination.
    #[must_use]
    pub fn advance(self, next_cursor: Option<String>) -> Self {
        match (self, next_cursor) {
            (Self::Done, _) => Self::Done,
            (Self::Fetching { .. }, Some(cursor)) if !cursor.is_empty() => Self::Fetching {
                cursor: Some(cursor),
            },
            (Self::Fetching { .. }, _) => Self::Done,
        }
    }
}
