use std::sync::Arc;

use newswell_store::{RecordFilter, Repository, Result};

/// Point lookups against the store for "have we imported this already?".
///
/// Migration is additive-only: a record whose identity is already present is
/// skipped, never overwritten, so re-running discovery is safe and cannot
/// clobber manually edited content. Migrated records are keyed by source
/// URL; curated records carry no source URL and are keyed by slug.
pub struct Deduplicator {
    repo: Arc<dyn Repository>,
}

impl Deduplicator {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub async fn source_exists(&self, source_url: &str) -> Result<bool> {
        let hits = self
            .repo
            .select(&RecordFilter::SourceUrl(source_url.to_string()))
            .await?;
        Ok(!hits.is_empty())
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool> {
        let hits = self
            .repo
            .select(&RecordFilter::Slug(slug.to_string()))
            .await?;
        Ok(!hits.is_empty())
    }
}
