//! Test harness: a canned legacy site behind the DocumentFetcher trait,
//! with MemoryRepository playing the store. No network, no database.

use std::collections::HashMap;

use async_trait::async_trait;

use newswell_archive::{ArchiveError, DocumentFetcher, FetchedDocument, Result};

pub const BASE: &str = "https://legacy.example.org";

#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    failures: HashMap<String, String>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn failing(mut self, url: &str, reason: &str) -> Self {
        self.failures.insert(url.to_string(), reason.to_string());
        self
    }
}

#[async_trait]
impl DocumentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument> {
        if let Some(reason) = self.failures.get(url) {
            return Err(ArchiveError::FetchFailed {
                url: url.to_string(),
                reason: reason.clone(),
            });
        }
        match self.pages.get(url) {
            Some(html) => Ok(FetchedDocument {
                url: url.to_string(),
                html: html.clone(),
            }),
            None => Err(ArchiveError::FetchFailed {
                url: url.to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            }),
        }
    }
}

/// An index page linking the given article paths.
pub fn index_page(paths: &[&str]) -> String {
    let links: String = paths
        .iter()
        .map(|p| format!(r#"<a href="{p}">An article</a>"#))
        .collect();
    format!("<html><body><nav>{links}</nav></body></html>")
}

/// A well-formed article page the default extractor config understands.
pub fn article_page(title: &str, body: &str) -> String {
    format!(
        r#"<html><head>
  <meta property="article:published_time" content="2023-06-15T10:30:00Z">
  <meta name="author" content="Legacy Desk">
</head><body>
  <h1>{title}</h1>
  <div class="post-content"><p>{body}</p></div>
</body></html>"#
    )
}

/// Body text long enough to clear the content length gate.
pub fn long_body(seed: &str) -> String {
    format!("{seed} ").repeat(15)
}
