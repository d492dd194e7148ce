//! Pagination module
//!
//! Cursor pagination as used by listing endpoints: each response carries the
//! cursor of the next page, and a missing cursor ends the listing.
//!
//! # Overview
//!
//! [`PaginationState`] is the two-state machine driven by the collection
//! loop; [`PaginationState::advance`] moves it forward with the cursor each
//! response reports. [`CursorPaginator`] turns a pending cursor into query
//! parameters.

mod cursor;
mod types;

pub use cursor::CursorPaginator;
pub use types::PaginationState;
