// Job Service - Core use cases for job entry management

pub mod save;
pub mod transfer;

use std::sync::Arc;

use tracing::info;

use crate::application::resume::ResumeDocument;
use crate::domain::{Job, JobDraft, JobId};
use crate::error::{AppError, Result};
use crate::port::JobStore;

/// Job Service: every operation the front end needs, over one injected store
pub struct JobService {
    store: Arc<dyn JobStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Validate and store a new job
    pub async fn add(&self, draft: &JobDraft) -> Result<JobId> {
        save::add(self.store.as_ref(), draft).await
    }

    /// Validate and overwrite an existing job
    pub async fn edit(&self, id: &JobId, draft: &JobDraft) -> Result<()> {
        save::edit(self.store.as_ref(), id, draft).await
    }

    /// Delete a job and its children
    pub async fn delete(&self, id: &JobId) -> Result<()> {
        self.store.delete(id).await?;
        info!(job_id = %id, "Job deleted");
        Ok(())
    }

    pub async fn get(&self, id: &JobId) -> Result<Job> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {} not found", id)))
    }

    /// All jobs, newest start date first
    pub async fn list(&self) -> Result<Vec<Job>> {
        Ok(self.store.list_all().await?)
    }

    /// Jobs matching `query` as given; a blank query lists everything
    pub async fn search(&self, query: &str) -> Result<Vec<Job>> {
        if query.trim().is_empty() {
            return self.list().await;
        }
        Ok(self.store.search(query).await?)
    }

    pub async fn export(&self) -> Result<Vec<u8>> {
        transfer::export(self.store.as_ref()).await
    }

    pub async fn import(&self, bytes: &[u8]) -> Result<Vec<JobId>> {
        transfer::import(self.store.as_ref(), bytes).await
    }

    /// Lay out the resume document for one job
    pub async fn resume(&self, id: &JobId) -> Result<ResumeDocument> {
        let job = self.get(id).await?;
        Ok(ResumeDocument::for_job(&job.record))
    }
}
