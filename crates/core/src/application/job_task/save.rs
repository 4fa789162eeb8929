// Add / Edit Use Cases

use tracing::{info, warn};

use crate::domain::{validate, JobDraft, JobId, ValidJob};
use crate::error::Result;
use crate::port::JobStore;

fn checked(draft: &JobDraft) -> Result<ValidJob> {
    validate(draft).map_err(|e| {
        warn!(job_title = %draft.job_title, reason = %e, "Job draft rejected");
        e.into()
    })
}

/// Validate a draft and store it as a new job
pub async fn add(store: &dyn JobStore, draft: &JobDraft) -> Result<JobId> {
    let valid = checked(draft)?;
    let id = store.create(valid.record()).await?;

    info!(job_id = %id, "Job created");
    Ok(id)
}

/// Validate a draft and replace the stored job with it (full overwrite,
/// including both child collections)
pub async fn edit(store: &dyn JobStore, id: &JobId, draft: &JobDraft) -> Result<()> {
    let valid = checked(draft)?;
    store.update(id, valid.record()).await?;

    info!(job_id = %id, "Job updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::error::AppError;
    use crate::port::{InMemoryJobStore, StorageError};
    use chrono::{Duration, TimeZone, Utc};

    fn draft(title: &str) -> JobDraft {
        let start = Utc.with_ymd_and_hms(2022, 5, 1, 0, 0, 0).unwrap();
        JobDraft::new(title, "Acme", start, start + Duration::days(30))
            .with_descriptions(["Built X"])
            .with_skills(["Go"])
    }

    #[tokio::test]
    async fn test_add_valid_draft() {
        let store = InMemoryJobStore::default();
        let id = add(&store, &draft("Engineer")).await.unwrap();

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.record.job_title, "Engineer");
    }

    #[tokio::test]
    async fn test_add_invalid_draft_never_reaches_store() {
        let store = InMemoryJobStore::default();
        let err = add(&store, &draft("SW")).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::TitleOrCompanyTooShort)
        ));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_edit_replaces_children() {
        let store = InMemoryJobStore::default();
        let id = add(&store, &draft("Engineer")).await.unwrap();

        let mut changed = draft("Senior Engineer");
        changed.descriptions = vec!["Led team".to_string(), "".to_string()];
        changed.skills = vec!["Rust".to_string(), "SQL".to_string()];
        edit(&store, &id, &changed).await.unwrap();

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.record.job_title, "Senior Engineer");
        assert_eq!(stored.record.descriptions.len(), 1);
        assert_eq!(stored.record.descriptions[0].text, "Led team");
        assert_eq!(stored.record.skills.len(), 2);
    }

    #[tokio::test]
    async fn test_edit_invalid_draft_keeps_stored_job() {
        let store = InMemoryJobStore::default();
        let id = add(&store, &draft("Engineer")).await.unwrap();

        let mut broken = draft("Engineer");
        broken.skills.clear();
        let err = edit(&store, &id, &broken).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingSkill)
        ));

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.record.skills.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_unknown_job() {
        let store = InMemoryJobStore::default();
        let err = edit(&store, &"missing".to_string(), &draft("Engineer"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(StorageError::NotFound(_))));
    }
}
