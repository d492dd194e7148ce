//! Page fetchers

use crate::config::CollectorConfig;
use crate::decode::ListingDecoder;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::CursorPaginator;
use crate::types::Page;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Source of comment pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page of `username`'s comments, starting at `cursor`
    async fn fetch(&self, username: &str, cursor: Option<&str>) -> Result<Page>;
}

/// Fetches pages from the `/user/<username>/comments` listing endpoint
#[derive(Debug)]
pub struct ListingFetcher {
    client: HttpClient,
    api_base: Url,
    decoder: ListingDecoder,
    paginator: CursorPaginator,
}

impl ListingFetcher {
    /// Create a fetcher for the API at `api_base`
    pub fn new(client: HttpClient, api_base: &str, decoder: ListingDecoder) -> Result<Self> {
        Ok(Self {
            client,
            api_base: Url::parse(api_base)?,
            decoder,
            paginator: CursorPaginator::default(),
        })
    }

    /// Build a fetcher from collector configuration
    pub fn from_config(config: &CollectorConfig) -> Result<Self> {
        let mut http = HttpClientConfig::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.timeout_secs {
            http = http.timeout(Duration::from_secs(secs));
        }
        let client = HttpClient::with_config(http.build())?;

        Self::new(
            client,
            &config.api_base_url,
            ListingDecoder::new(&config.permalink_base_url),
        )
    }

    /// Listing URL for `username`
    pub fn comments_url(&self, username: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::config(format!("API base URL cannot be a base: {}", self.api_base))
            })?
            .pop_if_empty()
            .extend(["user", username, "comments"]);
        Ok(url)
    }
}

#[async_trait]
impl PageFetcher for ListingFetcher {
    async fn fetch(&self, username: &str, cursor: Option<&str>) -> Result<Page> {
        let url = self.comments_url(username)?;

        let mut request = RequestConfig::new();
        for (key, value) in self.paginator.params(cursor) {
            request = request.query(key, value);
        }

        debug!("Fetching {} (cursor: {:?})", url, cursor);
        let body = self.client.get_text_with_config(url.as_str(), request).await?;

        self.decoder.decode(&body)
    }
}
