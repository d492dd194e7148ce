//! Content filter for comment bodies
//!
//! A body matches when it mentions one of the configured host tokens anywhere
//! in its text, ignoring case and line breaks.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Host tokens that identify a YouTube link
pub const YOUTUBE_HOSTS: &[&str] = &["youtu.be", "youtube.com"];

static YOUTUBE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    build_regex(YOUTUBE_HOSTS.iter().copied()).expect("escaped host pattern is valid")
});

/// Matches comment bodies that reference a set of hosts
#[derive(Debug, Clone)]
pub struct ContentFilter {
    regex: Regex,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::youtube()
    }
}

impl ContentFilter {
    /// Filter for `youtu.be` and `youtube.com`
    pub fn youtube() -> Self {
        Self {
            regex: YOUTUBE_REGEX.clone(),
        }
    }

    /// Filter for an arbitrary list of host tokens
    ///
    /// Tokens are matched literally; blank tokens are skipped. Fails when no
    /// usable token remains.
    pub fn for_hosts<I, S>(hosts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts: Vec<S> = hosts.into_iter().collect();
        let regex = build_regex(hosts.iter().map(AsRef::as_ref))?;
        Ok(Self { regex })
    }

    /// Check whether `body` references one of the hosts
    pub fn matches(&self, body: &str) -> bool {
        self.regex.is_match(body)
    }
}

/// Unanchored alternation of escaped tokens, so a match may sit anywhere,
/// including after any number of line breaks
fn build_regex<'a>(hosts: impl Iterator<Item = &'a str>) -> Result<Regex> {
    let alternatives: Vec<String> = hosts
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return Err(Error::config("at least one non-blank host token is required"));
    }

    RegexBuilder::new(&format!("(?:{})", alternatives.join("|")))
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::config(format!("Invalid host filter: {e}")))
}
