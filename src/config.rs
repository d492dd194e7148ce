//! Collector configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Command-line flags are applied on top of the loaded values.

use crate::error::{Error, Result};
use crate::filter::YOUTUBE_HOSTS;
use crate::types::DEFAULT_PERMALINK_BASE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default listing API host
pub const DEFAULT_API_BASE: &str = "https://api.reddit.com";

/// Settings for one collection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectorConfig {
    /// Base URL of the listing API
    pub api_base_url: String,

    /// Base URL relative permalinks are joined onto
    pub permalink_base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Request timeout in seconds (transport default when unset)
    pub timeout_secs: Option<u64>,

    /// Stop after this many pages (unbounded when unset)
    pub max_pages: Option<usize>,

    /// Host tokens a comment must mention to be kept
    pub hosts: Vec<String>,

    /// Directory the result file is written to
    pub output_dir: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            permalink_base_url: DEFAULT_PERMALINK_BASE.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
            max_pages: None,
            hosts: YOUTUBE_HOSTS.iter().map(ToString::to_string).collect(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl CollectorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_base_url).map_err(|e| {
            Error::config(format!("Invalid api_base_url '{}': {e}", self.api_base_url))
        })?;
        url::Url::parse(&self.permalink_base_url).map_err(|e| {
            Error::config(format!(
                "Invalid permalink_base_url '{}': {e}",
                self.permalink_base_url
            ))
        })?;

        if self.max_pages == Some(0) {
            return Err(Error::config("max_pages must be at least 1"));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::config("timeout_secs must be at least 1"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::config("user_agent must not be empty"));
        }
        if self.hosts.iter().all(|host| host.trim().is_empty()) {
            return Err(Error::config("hosts must contain at least one non-blank token"));
        }

        Ok(())
    }
}
