use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// Network error, non-2xx status, or empty body. Non-fatal to callers:
    /// the URL is skipped and the run continues.
    #[error("fetch failed for {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    /// A mandatory field was absent after exhausting every fallback
    /// strategy. The document is dropped and counted as an error.
    #[error("extraction failed for {url}: no qualifying {field}")]
    ExtractionFailed { url: String, field: &'static str },
}

/// Raw markup retrieved from the external site.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub url: String,
    pub html: String,
}

/// Retrieves a URL and returns its raw markup, or a failure. No automatic
/// retries; the caller decides whether to re-queue.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument>;
}

/// Plain HTTP fetcher over reqwest.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("newswell/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("static client configuration");
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument> {
        info!(url, "Fetching document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ArchiveError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Non-success status");
            return Err(ArchiveError::FetchFailed {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| ArchiveError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if html.trim().is_empty() {
            warn!(url, "Empty response body");
            return Err(ArchiveError::FetchFailed {
                url: url.to_string(),
                reason: "empty body".to_string(),
            });
        }

        info!(url, bytes = html.len(), "Fetched successfully");
        Ok(FetchedDocument {
            url: url.to_string(),
            html,
        })
    }
}
