// Repository — the only doorway to the persistence engine.
//
// The platform store is an external collaborator; this crate never talks to
// a concrete database. Everything goes through the Repository trait so the
// pipeline can run against MemoryRepository in tests and against whatever
// client the host application wires in.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use newswell_common::Article;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store rejected one record (unique key, schema check). Recoverable
    /// at record granularity.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The store itself cannot be reached. Fatal for the current batch.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Predicate over stored articles, used by select and delete.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordFilter {
    All,
    Id(Uuid),
    SourceUrl(String),
    Slug(String),
}

impl RecordFilter {
    fn matches(&self, article: &Article) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::Id(id) => article.id == Some(*id),
            RecordFilter::SourceUrl(url) => article.source_url.as_deref() == Some(url.as_str()),
            RecordFilter::Slug(slug) => article.slug == *slug,
        }
    }
}

#[async_trait]
pub trait Repository: Send + Sync {
    /// Return all articles matching the filter.
    async fn select(&self, filter: &RecordFilter) -> Result<Vec<Article>>;

    /// Insert one article. The store assigns the id; the stored record is
    /// returned. A non-null `source_url` must be unique.
    async fn insert(&self, article: &Article) -> Result<Article>;

    /// Delete all articles matching the filter. Returns the count removed.
    async fn delete(&self, filter: &RecordFilter) -> Result<u64>;
}

/// In-memory reference implementation. Backs tests and dry runs; also the
/// documentation of the store contract (id assignment, source_url
/// uniqueness) that real adapters must uphold.
#[derive(Default)]
pub struct MemoryRepository {
    records: RwLock<Vec<Article>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn select(&self, filter: &RecordFilter) -> Result<Vec<Article>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn insert(&self, article: &Article) -> Result<Article> {
        let mut records = self.records.write().await;
        if let Some(url) = article.source_url.as_deref() {
            if records
                .iter()
                .any(|r| r.source_url.as_deref() == Some(url))
            {
                return Err(StoreError::Constraint(format!(
                    "source_url already exists: {url}"
                )));
            }
        }
        let mut stored = article.clone();
        stored.id = Some(Uuid::new_v4());
        records.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, filter: &RecordFilter) -> Result<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| !filter.matches(r));
        Ok((before - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use newswell_common::{ArticleStatus, Category};

    fn article(slug: &str, source_url: Option<&str>) -> Article {
        Article {
            id: None,
            title: slug.replace('-', " "),
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

    #[tokio::test]
    async fn insert_assigns_id() {
        let repo = MemoryRepository::new();
        let stored = repo.insert(&article("a", None)).await.unwrap();
        assert!(stored.id.is_some());
    }

    #[tokio::test]
    async fn duplicate_source_url_is_a_constraint_violation() {
        let repo = MemoryRepository::new();
        repo.insert(&article("a", Some("https://x/a"))).await.unwrap();
        let err = repo
            .insert(&article("b", Some("https://x/a")))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
    }

    #[tokio::test]
    async fn null_source_urls_do_not_collide() {
        let repo = MemoryRepository::new();
        repo.insert(&article("a", None)).await.unwrap();
        repo.insert(&article("b", None)).await.unwrap();
        let all = repo.select(&RecordFilter::All).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn select_by_source_url() {
        let repo = MemoryRepository::new();
        repo.insert(&article("a", Some("https://x/a"))).await.unwrap();
        repo.insert(&article("b", Some("https://x/b"))).await.unwrap();

        let hits = repo
            .select(&RecordFilter::SourceUrl("https://x/a".to_string()))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "a");
    }

    #[tokio::test]
    async fn delete_by_slug_returns_count() {
        let repo = MemoryRepository::new();
        repo.insert(&article("a", None)).await.unwrap();
        repo.insert(&article("b", None)).await.unwrap();

        let removed = repo
            .delete(&RecordFilter::Slug("a".to_string()))
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert_eq!(repo.select(&RecordFilter::All).await.unwrap().len(), 1);
    }
}
