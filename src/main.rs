//! yt-comment-collector CLI
//!
//! Collects a Reddit user's comments that link to YouTube into
//! `<username>-youtube-comments.json`.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yt_comment_collector::cli::{Cli, Runner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(cli.log_filter(rust_log.as_deref()))
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
