//! JSON result writer

use crate::error::{Error, Result};
use crate::types::ResultSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name results for `username` are written to
pub fn output_file_name(username: &str) -> String {
    format!("{username}-youtube-comments.json")
}

/// Full path of the result file for `username` inside `dir`
pub fn output_path(dir: impl AsRef<Path>, username: &str) -> PathBuf {
    dir.as_ref().join(output_file_name(username))
}

/// Render results as a pretty-printed JSON array
pub fn render_json(results: &ResultSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Write results for `username` into `dir`, replacing any previous file
///
/// Returns the path that was written.
pub fn write_result_set(
    dir: impl AsRef<Path>,
    username: &str,
    results: &ResultSet,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::output(format!(
            "Output directory does not exist: {}",
            dir.display()
        )));
    }

    let json = render_json(results)?;
    let path = output_path(dir, username);

    fs::write(&path, json).map_err(|e| Error::Output {
        message: format!("Failed to write {}: {e}", path.display()),
    })?;

    info!("Wrote {} comments to {}", results.len(), path.display());
    Ok(path)
}
