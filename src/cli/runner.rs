//! CLI runner - executes a collection run

use crate::cli::commands::Cli;
use crate::config::CollectorConfig;
use crate::engine::{CollectConfig, CommentCollector, ListingFetcher};
use crate::error::{Error, Result};
use crate::filter::ContentFilter;
use crate::output::write_result_set;
use std::path::PathBuf;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the collection and write the result file
    ///
    /// Returns the path of the written file.
    pub async fn run(&self) -> Result<PathBuf> {
        let username = self.username()?;
        let config = self.load_config()?;

        let fetcher = ListingFetcher::from_config(&config)?;
        let mut collect = CollectConfig::new();
        if let Some(max_pages) = config.max_pages {
            collect = collect.with_max_pages(max_pages);
        }

        let collector = CommentCollector::new(fetcher)
            .with_filter(ContentFilter::for_hosts(&config.hosts)?)
            .with_config(collect);

        let results = collector.collect_all(username).await?;
        write_result_set(&config.output_dir, username, &results)
    }

    /// Username given on the command line
    fn username(&self) -> Result<&str> {
        self.cli
            .username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::missing_input("username"))
    }

    /// Config file values with command-line overrides applied
    fn load_config(&self) -> Result<CollectorConfig> {
        let mut config = match &self.cli.config {
            Some(path) => CollectorConfig::load(path)?,
            None => CollectorConfig::default(),
        };

        if let Some(dir) = &self.cli.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(max_pages) = self.cli.max_pages {
            let max_pages = usize::try_from(max_pages)
                .map_err(|_| Error::config(format!("max_pages out of range: {max_pages}")))?;
            config.max_pages = Some(max_pages);
        }

        config.validate()?;
        Ok(config)
    }
}
