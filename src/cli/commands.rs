//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Collect a Reddit user's comments that link to YouTube
#[derive(Parser, Debug)]
#[command(name = "yt-comment-collector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reddit username whose comments are collected
    pub username: Option<String>,

    /// Configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the result file is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Stop after this many pages
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter for this run
    ///
    /// `rust_log` (the `RUST_LOG` value) wins when set and parsable;
    /// otherwise `info`, or `debug` with `--verbose`.
    pub fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        let default = if self.verbose { "debug" } else { "info" };
        rust_log
            .filter(|directives| !directives.trim().is_empty())
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(default))
    }
}
