use crate::types::{FetchConfig, PressError, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};

/// HTTP access for the feed and the articles it links to.
///
/// Nothing here retries: a failed request is reported once and the caller
/// decides what that means for the run.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| PressError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Download the raw feed document.
    pub async fn fetch_feed(&self, url: &str) -> Result<String> {
        debug!("Fetching feed: {}", url);

        let response = self
            .send(url)
            .await
            .map_err(|reason| PressError::fetch(url, reason))?;

        if let Some(content_length) = response.content_length() {
            let size_mb = content_length as usize / (1024 * 1024);
            if size_mb > self.config.max_feed_size_mb {
                return Err(PressError::fetch(
                    url,
                    format!("feed too large: {}MB", size_mb),
                ));
            }
        }

        let content = response
            .text()
            .await
            .map_err(|e| PressError::fetch(url, e))?;

        info!("Fetched feed: {} ({} bytes)", url, content.len());
        Ok(content)
    }

    /// Download an article page linked from the feed.
    pub async fn fetch_full_content(&self, url: &str) -> Result<String> {
        debug!("Fetching full content from: {}", url);

        let response = self
            .send(url)
            .await
            .map_err(|reason| PressError::retrieval(url, reason))?;

        let content = response
            .text()
            .await
            .map_err(|e| PressError::retrieval(url, e))?;

        debug!("Fetched article: {} ({} bytes)", url, content.len());
        Ok(content)
    }

    async fn send(&self, url: &str) -> std::result::Result<Response, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ));
        }

        Ok(response)
    }
}
