//! Output module
//!
//! Writes a finished [`ResultSet`](crate::types::ResultSet) to disk.
//!
//! # Overview
//!
//! Results are stored as a pretty-printed JSON array of `{uri, body}`
//! objects in `<username>-youtube-comments.json`. An existing file with that
//! name is replaced.

mod writer;

pub use writer::{output_file_name, output_path, render_json, write_result_set};
