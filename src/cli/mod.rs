//! CLI module
//!
//! Command-line interface for collecting a user's YouTube-linking comments.
//!
//! ```text
//! yt-comment-collector <USERNAME> [--config FILE] [--output-dir DIR] [--max-pages N]
//! ```

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
