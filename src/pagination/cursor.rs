//! Cursor pagination strategy

use std::collections::HashMap;

/// Query parameter listing endpoints read the cursor from
pub const DEFAULT_CURSOR_PARAM: &str = "after";

/// Cursor-based pagination (e.g., Reddit listings)
///
/// Sends the cursor from the previous response as a query parameter:
/// - first page: no parameter
/// - later pages: `?after=t1_abc123`
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Query parameter name for cursor
    pub cursor_param: String,
}

impl Default for CursorPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_CURSOR_PARAM)
    }
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(cursor_param: impl Into<String>) -> Self {
        Self {
            cursor_param: cursor_param.into(),
        }
    }

    /// Query parameters for a request made with `cursor`
    pub fn params(&self, cursor: Option<&str>) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(cursor) = cursor {
            params.insert(self.cursor_param.clone(), cursor.to_string());
        }
        params
    }
}
