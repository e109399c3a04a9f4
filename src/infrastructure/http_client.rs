//! Page snapshot retrieval
//!
//! Thin HTTP client handing the extraction core a raw HTML document. The
//! bank renders the actual rate sheet inside an iframe after form
//! interaction; driving that interaction (dropdown, radio button, waits) is
//! a browser-automation concern that lives outside this crate. This client
//! only fetches an already-addressable snapshot URL, and the bins accept a
//! saved snapshot file as an alternative input.

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use super::config::CrawlerConfig;

/// Client fetching one HTML snapshot per invocation
pub struct PageSnapshotClient {
    client: Client,
    page_url: String,
}

impl PageSnapshotClient {
    /// Build a client from crawler configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .cookie_store(true)
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            page_url: config.page_url.clone(),
        })
    }

    /// Fetch the configured rate-lookup page as an HTML string.
    pub async fn fetch_snapshot(&self) -> Result<String> {
        info!(url = %self.page_url, "Fetching rate-lookup page");

        let response = self
            .client
            .get(&self.page_url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.page_url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Request to {} returned {}", self.page_url, status);
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;
        debug!(bytes = html.len(), "Fetched page snapshot");
        Ok(html)
    }
}

/// Read a previously saved page snapshot from disk.
pub async fn read_snapshot_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))
}
