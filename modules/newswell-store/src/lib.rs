pub mod backup;
pub mod repository;

pub use backup::{Backup, BackupManager};
pub use repository::{MemoryRepository, RecordFilter, Repository, Result, StoreError};
