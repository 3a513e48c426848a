// Batch import with per-record failure isolation.
//
// A single record's insert failure never aborts its batch; a store that has
// gone away entirely fails the batch, and later batches still attempt
// (best-effort, not fail-fast).

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use newswell_common::{Article, BatchResult, FailedImport};
use newswell_store::{Repository, StoreError};

use crate::dedup::Deduplicator;

#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Records per batch.
    pub batch_size: usize,
    /// Pause between successive batches. Throttling policy, not a
    /// correctness requirement.
    pub batch_delay: Duration,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: 10,
            batch_delay: Duration::from_millis(100),
        }
    }
}

/// Aggregate over all batches of one run.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub attempted: u32,
    pub imported: Vec<Article>,
    pub skipped: Vec<Article>,
    pub failed: Vec<FailedImport>,
    /// Batch-level fatal errors. Non-empty means the run's success flag
    /// goes false even though other batches may have landed.
    pub batch_errors: Vec<String>,
}

pub struct BatchImporter {
    repo: Arc<dyn Repository>,
    dedup: Deduplicator,
    config: ImportConfig,
}

impl BatchImporter {
    pub fn new(repo: Arc<dyn Repository>, config: ImportConfig) -> Self {
        let dedup = Deduplicator::new(repo.clone());
        Self {
            repo,
            dedup,
            config,
        }
    }

    /// Drive the full record list through fixed-size batches, one at a time,
    /// with the configured delay between batches.
    pub async fn import_all(&self, records: &[Article]) -> ImportSummary {
        let mut summary = ImportSummary::default();
        let batches = records.chunks(self.config.batch_size);
        let total = batches.len();

        for (i, batch) in batches.enumerate() {
            if i > 0 {
                tokio::time::sleep(self.config.batch_delay).await;
            }
            let (result, fatal) = self.import_batch(batch).await;
            info!(
                batch = i + 1,
                total,
                imported = result.imported.len(),
                skipped = result.skipped.len(),
                failed = result.failed.len(),
                "Batch processed"
            );
            summary.attempted += result.attempted;
            summary.imported.extend(result.imported);
            summary.skipped.extend(result.skipped);
            summary.failed.extend(result.failed);
            if let Some(reason) = fatal {
                warn!(batch = i + 1, reason = reason.as_str(), "Batch failed");
                summary.batch_errors.push(format!("batch {} failed: {reason}", i + 1));
            }
        }

        summary
    }

    /// Import one batch. Duplicates are skipped, constraint rejections are
    /// captured per record, and processing continues. A store-unavailable
    /// error is batch-fatal: the remaining records of this batch are marked
    /// failed and the error is surfaced alongside the partial result.
    pub async fn import_batch(&self, batch: &[Article]) -> (BatchResult, Option<String>) {
        let mut result = BatchResult::default();

        for (pos, article) in batch.iter().enumerate() {
            result.attempted += 1;

            let duplicate = match self.is_duplicate(article).await {
                Ok(duplicate) => duplicate,
                Err(StoreError::Constraint(reason)) => {
                    result.failed.push(FailedImport {
                        article: article.clone(),
                        reason,
                    });
                    continue;
                }
                Err(StoreError::Unavailable(reason)) => {
                    self.fail_remaining(&mut result, &batch[pos..], &reason);
                    return (result, Some(reason));
                }
            };

            if duplicate {
                info!(slug = article.slug.as_str(), "Skipping existing record");
                result.skipped.push(article.clone());
                continue;
            }

            match self.repo.insert(article).await {
                Ok(stored) => {
                    info!(slug = stored.slug.as_str(), "Imported");
                    result.imported.push(stored);
                }
                Err(StoreError::Constraint(reason)) => {
                    warn!(
                        slug = article.slug.as_str(),
                        reason = reason.as_str(),
                        "Insert rejected"
                    );
                    result.failed.push(FailedImport {
                        article: article.clone(),
                        reason,
                    });
                }
                Err(StoreError::Unavailable(reason)) => {
                    self.fail_remaining(&mut result, &batch[pos..], &reason);
                    return (result, Some(reason));
                }
            }
        }

        (result, None)
    }

    async fn is_duplicate(&self, article: &Article) -> Result<bool, StoreError> {
        match article.source_url.as_deref() {
            Some(url) => self.dedup.source_exists(url).await,
            None => self.dedup.slug_exists(&article.slug).await,
        }
    }

    /// Mark the failing record and everything after it in the batch as
    /// failed, so run-level accounting still adds up.
    fn fail_remaining(&self, result: &mut BatchResult, rest: &[Article], reason: &str) {
        for article in rest {
            result.failed.push(FailedImport {
                article: article.clone(),
                reason: reason.to_string(),
            });
        }
        result.attempted += rest.len().saturating_sub(1) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use newswell_common::{ArticleStatus, Category};
    use newswell_store::{MemoryRepository, RecordFilter, Result as StoreResult};

    fn article(slug: &str, source_url: Option<&str>) -> Article {
        Article {
            id: None,
            title: slug.to_string(),
            slug: slug.to_string(),
            excerpt: String::new(),
            content: "body".to_string(),
            category: Category::Community,
            tags: vec![],
            author: "Test".to_string(),
            published_at: Utc::now(),
            source_url: source_url.map(str::to_string),
            status: ArticleStatus::Published,
            location: None,
            validation_score: None,
            community_voices: 0,
            moderation_note: None,
        }
    }

    /// Rejects inserts for configured slugs with a constraint violation.
    struct RejectingRepository {
        inner: MemoryRepository,
        reject_slugs: Vec<String>,
    }

    #[async_trait]
    impl Repository for RejectingRepository {
        async fn select(&self, filter: &RecordFilter) -> StoreResult<Vec<Article>> {
            self.inner.select(filter).await
        }

        async fn insert(&self, a: &Article) -> StoreResult<Article> {
            if self.reject_slugs.contains(&a.slug) {
                return Err(StoreError::Constraint(format!(
                    "rejected by test: {}",
                    a.slug
                )));
            }
            self.inner.insert(a).await
        }

        async fn delete(&self, filter: &RecordFilter) -> StoreResult<u64> {
            self.inner.delete(filter).await
        }
    }

    /// A store that has gone away.
    struct DownRepository;

    #[async_trait]
    impl Repository for DownRepository {
        async fn select(&self, _: &RecordFilter) -> StoreResult<Vec<Article>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn insert(&self, _: &Article) -> StoreResult<Article> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn delete(&self, _: &RecordFilter) -> StoreResult<u64> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn imports_in_batches_and_accounts_for_everything() {
        let repo = Arc::new(MemoryRepository::new());
        let importer = BatchImporter::new(
            repo.clone(),
            ImportConfig {
                batch_size: 2,
                batch_delay: Duration::from_millis(0),
            },
        );

        let records: Vec<Article> = (0..5)
            .map(|i| article(&format!("s{i}"), Some(&format!("https://x/{i}"))))
            .collect();
        let summary = importer.import_all(&records).await;

        assert_eq!(summary.attempted, 5);
        assert_eq!(summary.imported.len(), 5);
        assert!(summary.skipped.is_empty());
        assert!(summary.failed.is_empty());
        assert!(summary.batch_errors.is_empty());
        assert_eq!(repo.select(&RecordFilter::All).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn duplicates_are_skipped_not_overwritten() {
        let repo = Arc::new(MemoryRepository::new());
        repo.insert(&article("existing", Some("https://x/a")))
            .await
            .unwrap();

        let importer = BatchImporter::new(repo.clone(), ImportConfig::default());
        let summary = importer
            .import_all(&[article("incoming", Some("https://x/a"))])
            .await;

        assert_eq!(summary.imported.len(), 0);
        assert_eq!(summary.skipped.len(), 1);
        // The stored record keeps its original slug.
        let stored = repo.select(&RecordFilter::All).await.unwrap();
        assert_eq!(stored[0].slug, "existing");
    }

    #[tokio::test]
    async fn one_rejected_record_does_not_abort_the_batch() {
        let repo = Arc::new(RejectingRepository {
            inner: MemoryRepository::new(),
            reject_slugs: vec!["s1".to_string()],
        });
        let importer = BatchImporter::new(repo.clone(), ImportConfig::default());

        let records: Vec<Article> = (0..3)
            .map(|i| article(&format!("s{i}"), Some(&format!("https://x/{i}"))))
            .collect();
        let summary = importer.import_all(&records).await;

        assert_eq!(summary.imported.len(), 2);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].article.slug, "s1");
        assert!(summary.batch_errors.is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_is_batch_fatal_but_accounted() {
        let importer = BatchImporter::new(Arc::new(DownRepository), ImportConfig::default());

        let records: Vec<Article> = (0..3)
            .map(|i| article(&format!("s{i}"), Some(&format!("https://x/{i}"))))
            .collect();
        let summary = importer.import_all(&records).await;

        assert!(summary.imported.is_empty());
        assert_eq!(summary.failed.len(), 3);
        assert_eq!(summary.batch_errors.len(), 1);
        assert_eq!(summary.attempted, 3);
    }
}
