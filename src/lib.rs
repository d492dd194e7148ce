//! # yt-comment-collector
//!
//! Collects every comment a Reddit user has written that links to YouTube
//! and stores them as a JSON document.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yt_comment_collector::engine::{CommentCollector, ListingFetcher};
//! use yt_comment_collector::{CollectorConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = CollectorConfig::default();
//!     let collector = CommentCollector::new(ListingFetcher::from_config(&config)?);
//!
//!     let comments = collector.collect_all("spez").await?;
//!     yt_comment_collector::output::write_result_set(".", "spez", &comments)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 CommentCollector::collect_all                │
//! │      Fetching(cursor) ──fetch──▶ filter ──▶ accumulate        │
//! │             ▲                                   │            │
//! │             └──────────── after != null ────────┘            │
//! │                           after == null ──▶ Done             │
//! └──────────────────────────────────────────────────────────────┘
//!        │                 │                 │            │
//!  ┌─────┴────┐     ┌──────┴─────┐    ┌──────┴────┐  ┌────┴────┐
//!  │   HTTP   │     │   Decode   │    │  Filter   │  │ Output  │
//!  │ reqwest  │     │  Listing   │    │  regex    │  │  JSON   │
//!  └──────────┘     └────────────┘    └───────────┘  └─────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page and comment types
pub mod types;

/// HTTP client
pub mod http;

/// Listing response decoding
pub mod decode;

/// Cursor pagination
pub mod pagination;

/// Comment body filter
pub mod filter;

/// Collection loop and page fetchers
pub mod engine;

/// JSON result output
pub mod output;

/// Collector configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::CollectorConfig;
pub use error::{Error, ErrorCategory, Result};
pub use types::{FilteredComment, Page, RawComment, ResultSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
