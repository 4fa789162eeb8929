// Job Store Port (Storage Gateway interface)

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Job, JobId, JobRecord};

/// Failure reported by a store implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Job not found: {0}")]
    NotFound(JobId),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Persistence interface for job entries.
///
/// Implementations assign ids, own cascades to child rows, and return
/// listings ordered by `start_date` descending.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a new job and its children, returning the assigned id
    async fn create(&self, record: &JobRecord) -> StorageResult<JobId>;

    /// Insert several jobs (import batch)
    async fn create_batch(&self, records: &[JobRecord]) -> StorageResult<Vec<JobId>>;

    /// Find job by ID
    async fn find_by_id(&self, id: &JobId) -> StorageResult<Option<Job>>;

    /// Overwrite scalar fields and replace both child collections
    async fn update(&self, id: &JobId, record: &JobRecord) -> StorageResult<()>;

    /// Delete a job together with its descriptions and skills
    async fn delete(&self, id: &JobId) -> StorageResult<()>;

    /// All jobs, newest start date first
    async fn list_all(&self) -> StorageResult<Vec<Job>>;

    /// Jobs whose title, company, descriptions or skills contain `needle`
    /// (case-insensitive), newest start date first
    async fn search(&self, needle: &str) -> StorageResult<Vec<Job>>;
}
