//! MigrationOrchestrator — the scrape-based migration workflow.
//!
//! A linear, non-resumable state machine:
//! Idle → Discovering → BackingUp → Migrating → Complete | Error.
//! A crash mid-Migrating does not resume; the operator either restores the
//! backup taken at BackingUp or re-runs on top of partial progress, which is
//! safe because the importer skips previously imported identities.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use tracing::{info, warn};

use newswell_archive::{
    discover_article_links, extract_hashtags, Document, DocumentFetcher, ExtractorConfig,
    FetchedDocument, FieldExtractor,
};
use newswell_common::{Article, MigrationConfig, MigrationReport, SourceArticle};
use newswell_store::{Backup, BackupManager, RecordFilter, Repository};

use crate::classify::{Classifier, ClassifierConfig};
use crate::import::{BatchImporter, ImportConfig};
use crate::transform::ArticleTransformer;

/// Collection the migration writes into.
const COLLECTION: &str = "articles";

#[derive(Debug, Clone, PartialEq)]
pub enum MigrationState {
    Idle,
    Discovering,
    BackingUp,
    Migrating,
    Complete,
    /// Terminal. Carries the triggering error's message; only `reset`
    /// leaves this state.
    Error(String),
}

/// What one discovery pass produced.
struct Discovery {
    /// Candidate links resolved from the index page.
    candidates: usize,
    articles: Vec<SourceArticle>,
    extraction_errors: u32,
    errors: Vec<String>,
}

pub struct MigrationOrchestrator {
    fetcher: Arc<dyn DocumentFetcher>,
    repo: Arc<dyn Repository>,
    config: MigrationConfig,
    extractor: FieldExtractor,
    classifier: Classifier,
    state: MigrationState,
    last_backup: Option<Backup>,
}

impl MigrationOrchestrator {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        repo: Arc<dyn Repository>,
        config: MigrationConfig,
    ) -> Self {
        Self {
            fetcher,
            repo,
            config,
            extractor: FieldExtractor::default(),
            classifier: Classifier::default(),
            state: MigrationState::Idle,
            last_backup: None,
        }
    }

    /// Swap in operator-tuned extraction heuristics.
    pub fn with_extractor_config(mut self, config: ExtractorConfig) -> Self {
        self.extractor = FieldExtractor::new(config);
        self
    }

    /// Swap in operator-tuned classification heuristics.
    pub fn with_classifier_config(mut self, config: ClassifierConfig) -> Self {
        self.classifier = Classifier::new(config);
        self
    }

    pub fn state(&self) -> &MigrationState {
        &self.state
    }

    /// Backup taken at the BackingUp phase of the most recent run.
    pub fn last_backup(&self) -> Option<&Backup> {
        self.last_backup.as_ref()
    }

    /// Clear in-memory run state. Required to leave the Error state.
    pub fn reset(&mut self) {
        self.state = MigrationState::Idle;
        self.last_backup = None;
    }

    /// Discover candidates without importing anything. Leaves the store
    /// untouched.
    pub async fn discover(&mut self) -> Result<Vec<SourceArticle>> {
        self.guard_runnable()?;
        self.state = MigrationState::Discovering;
        match self.discover_phase().await {
            Ok(discovery) => {
                self.state = MigrationState::Idle;
                Ok(discovery.articles)
            }
            Err(e) => {
                self.state = MigrationState::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Run the full migration. Fetch and extraction failures are recovered
    /// locally; only discovery- or backup-phase failures propagate, after
    /// transitioning to Error.
    pub async fn run(&mut self) -> Result<MigrationReport> {
        self.guard_runnable()?;

        self.state = MigrationState::Discovering;
        let discovery = match self.discover_phase().await {
            Ok(d) => d,
            Err(e) => {
                self.state = MigrationState::Error(e.to_string());
                return Err(e);
            }
        };

        if discovery.candidates == 0 {
            info!("No candidate articles found; nothing to migrate");
            self.state = MigrationState::Complete;
            return Ok(MigrationReport::empty_success());
        }

        self.state = MigrationState::BackingUp;
        let backup_manager = BackupManager::new(self.repo.clone());
        match backup_manager.snapshot(COLLECTION).await {
            Ok(backup) => self.last_backup = Some(backup),
            Err(e) => {
                self.state = MigrationState::Error(e.to_string());
                return Err(e.into());
            }
        }

        self.state = MigrationState::Migrating;
        let records: Vec<Article> = discovery
            .articles
            .iter()
            .map(ArticleTransformer::transform)
            .collect();
        let importer = BatchImporter::new(
            self.repo.clone(),
            ImportConfig {
                batch_size: self.config.batch_size,
                batch_delay: Duration::from_millis(self.config.batch_delay_ms),
            },
        );
        let summary = importer.import_all(&records).await;

        let mut errors = discovery.errors;
        errors.extend(summary.batch_errors.iter().cloned());
        let report = MigrationReport {
            success: summary.batch_errors.is_empty(),
            processed: discovery.articles.len() as u32 + discovery.extraction_errors,
            imported: summary.imported,
            skipped: summary.skipped,
            failed: summary.failed,
            extraction_errors: discovery.extraction_errors,
            errors,
        };

        self.state = MigrationState::Complete;
        info!("{report}");
        Ok(report)
    }

    /// Exact-replace recovery: clear the collection and re-insert the backup
    /// retained from this run's BackingUp phase.
    pub async fn rollback(&self) -> Result<u64> {
        let backup = self
            .last_backup
            .as_ref()
            .ok_or_else(|| anyhow!("no backup retained; run a migration first"))?;
        let removed = self.repo.delete(&RecordFilter::All).await?;
        let restored = BackupManager::new(self.repo.clone()).restore(backup).await?;
        info!(removed, restored, "Rolled back to pre-migration backup");
        Ok(restored)
    }

    fn guard_runnable(&self) -> Result<()> {
        if let MigrationState::Error(message) = &self.state {
            bail!("orchestrator is in a terminal error state ({message}); reset first");
        }
        Ok(())
    }

    /// Fetch the index, resolve candidate links, then fetch and extract each
    /// candidate sequentially. Per-URL failures are recorded and skipped.
    async fn discover_phase(&self) -> Result<Discovery> {
        info!(base_url = self.config.base_url.as_str(), "Discovering articles");

        let index = self.fetcher.fetch(&self.config.base_url).await?;
        let candidates = discover_article_links(
            &index.html,
            &self.config.base_url,
            self.config.max_discovered_links,
        );
        info!(count = candidates.len(), "Candidate links resolved");

        let mut discovery = Discovery {
            candidates: candidates.len(),
            articles: Vec::new(),
            extraction_errors: 0,
            errors: Vec::new(),
        };

        for url in &candidates {
            let doc = match self.fetcher.fetch(url).await {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(url = url.as_str(), error = %e, "Skipping candidate");
                    discovery.errors.push(e.to_string());
                    continue;
                }
            };
            match self.extract_article(&doc) {
                Ok(article) => {
                    info!(
                        url = url.as_str(),
                        title = article.title.as_str(),
                        "Extracted article"
                    );
                    discovery.articles.push(article);
                }
                Err(e) => {
                    warn!(url = url.as_str(), error = %e, "Extraction failed");
                    discovery.extraction_errors += 1;
                    discovery.errors.push(e.to_string());
                }
            }
        }

        info!(
            articles = discovery.articles.len(),
            extraction_errors = discovery.extraction_errors,
            "Discovery complete"
        );
        Ok(discovery)
    }

    /// Parse, extract, and classify one fetched document.
    fn extract_article(&self, doc: &FetchedDocument) -> newswell_archive::Result<SourceArticle> {
        let parsed = Document::parse(&doc.html, &doc.url);
        let fields = self.extractor.extract(&parsed)?;
        let classification =
            self.classifier
                .classify(&fields.title, &fields.content, &fields.meta_keywords);
        let hashtags = extract_hashtags(&fields.content);

        Ok(SourceArticle {
            title: fields.title,
            content: fields.content,
            published_at: fields.published_at.unwrap_or_else(Utc::now),
            source_url: doc.url.clone(),
            featured_image: fields.featured_image,
            author: fields
                .author
                .unwrap_or_else(|| self.config.fallback_author.clone()),
            source_category: classification.category,
            tags: classification.tags,
            hashtags,
        })
    }
}
