use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use newswell_common::Article;

use crate::repository::{RecordFilter, Repository, Result};

/// Immutable point-in-time snapshot of a collection. Held in memory for the
/// duration of a migration run; callers persist it themselves if they want
/// it to outlive the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub collection: String,
    pub records: Vec<Article>,
    pub taken_at: DateTime<Utc>,
    pub count: usize,
}

/// Snapshots and restores whole collections through the repository.
pub struct BackupManager {
    repo: Arc<dyn Repository>,
}

impl BackupManager {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Full read of the collection into an immutable snapshot.
    pub async fn snapshot(&self, collection: &str) -> Result<Backup> {
        let records = self.repo.select(&RecordFilter::All).await?;
        let backup = Backup {
            collection: collection.to_string(),
            count: records.len(),
            records,
            taken_at: Utc::now(),
        };
        info!(
            collection,
            count = backup.count,
            "Pre-migration backup created"
        );
        Ok(backup)
    }

    /// Re-insert every record from the snapshot. Additive: callers wanting an
    /// exact replace must clear conflicting state first. The store reassigns
    /// ids, so restoration guarantees content-level equivalence only. An
    /// empty backup is a no-op. Returns the count restored.
    pub async fn restore(&self, backup: &Backup) -> Result<u64> {
        if backup.records.is_empty() {
            return Ok(0);
        }
        let mut restored = 0u64;
        for record in &backup.records {
            let mut fresh = record.clone();
            fresh.id = None;
            self.repo.insert(&fresh).await?;
            restored += 1;
        }
        info!(
            collection = backup.collection.as_str(),
            restored, "Backup restored"
        );
        Ok(restored)
    }
}
