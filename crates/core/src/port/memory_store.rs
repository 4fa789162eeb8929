// In-Memory JobStore (tests, previews)

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Job, JobId, JobRecord};
use crate::port::id_provider::{IdProvider, UuidProvider};
use crate::port::job_store::{JobStore, StorageError, StorageResult};

#[derive(Default)]
struct Inner {
    // Insertion sequence breaks start_date ties in listings
    next_seq: u64,
    jobs: HashMap<JobId, (u64, JobRecord)>,
}

impl Inner {
    fn insert(&mut self, id: JobId, record: JobRecord) -> StorageResult<()> {
        if self.jobs.contains_key(&id) {
            return Err(StorageError::Constraint(format!(
                "Job {} already exists",
                id
            )));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.jobs.insert(id, (seq, record));
        Ok(())
    }

    fn ordered(&self, needle: &str) -> Vec<Job> {
        let mut hits: Vec<(&JobId, &(u64, JobRecord))> = self
            .jobs
            .iter()
            .filter(|(_, (_, record))| record.matches(needle))
            .collect();

        hits.sort_by(|(_, (seq_a, a)), (_, (seq_b, b))| {
            b.start_date.cmp(&a.start_date).then(seq_a.cmp(seq_b))
        });

        hits.into_iter()
            .map(|(id, (_, record))| Job::new(id.clone(), record.clone()))
            .collect()
    }
}

/// `JobStore` backed by a map behind an async `RwLock`
pub struct InMemoryJobStore {
    inner: RwLock<Inner>,
    id_provider: Arc<dyn IdProvider>,
}

impl InMemoryJobStore {
    pub fn new(id_provider: Arc<dyn IdProvider>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            id_provider,
        }
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidProvider))
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn create(&self, record: &JobRecord) -> StorageResult<JobId> {
        let id = self.id_provider.generate_id();
        self.inner.write().await.insert(id.clone(), record.clone())?;
        Ok(id)
    }

    async fn create_batch(&self, records: &[JobRecord]) -> StorageResult<Vec<JobId>> {
        let ids: Vec<JobId> = records
            .iter()
            .map(|_| self.id_provider.generate_id())
            .collect();

        let mut inner = self.inner.write().await;
        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(dup) = ids
            .iter()
            .find(|id| inner.jobs.contains_key(*id) || !seen.insert(*id))
        {
            return Err(StorageError::Constraint(format!(
                "Job {} already exists",
                dup
            )));
        }
        for (id, record) in ids.iter().zip(records) {
            inner.insert(id.clone(), record.clone())?;
        }
        Ok(ids)
    }

    async fn find_by_id(&self, id: &JobId) -> StorageResult<Option<Job>> {
        let inner = self.inner.read().await;
        Ok(inner
            .jobs
            .get(id)
            .map(|(_, record)| Job::new(id.clone(), record.clone())))
    }

    async fn update(&self, id: &JobId, record: &JobRecord) -> StorageResult<()> {
        let mut inner = self.inner.write().await;
        match inner.jobs.get_mut(id) {
            Some((_, stored)) => {
                *stored = record.clone();
                Ok(())
            }
            None => Err(StorageError::NotFound(id.clone())),
        }
    }

    async fn delete(&self, id: &JobId) -> StorageResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .jobs
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(id.clone()))
    }

    async fn list_all(&self) -> StorageResult<Vec<Job>> {
        Ok(self.inner.read().await.ordered(""))
    }

    async fn search(&self, needle: &str) -> StorageResult<Vec<Job>> {
        Ok(self.inner.read().await.ordered(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::id_provider::SequentialIdProvider;
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn store() -> InMemoryJobStore {
        InMemoryJobStore::new(Arc::new(SequentialIdProvider::default()))
    }

    fn record(title: &str, start: DateTime<Utc>) -> JobRecord {
        JobRecord::new(title, "Acme", start, start)
            .with_descriptions(["Did things"])
            .with_skills(["Rust"])
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = store();
        let id = store.create(&record("Engineer", date(2024, 1, 1))).await.unwrap();
        assert_eq!(id, "job-1");

        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.record.job_title, "Engineer");
        assert!(store.find_by_id(&"missing".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_start_date_desc() {
        let store = store();
        store.create(&record("Oldest", date(2019, 1, 1))).await.unwrap();
        store.create(&record("Newest", date(2024, 1, 1))).await.unwrap();
        store.create(&record("Middle", date(2021, 1, 1))).await.unwrap();
        store.create(&record("Middle Twin", date(2021, 1, 1))).await.unwrap();

        let titles: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.record.job_title)
            .collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Middle Twin", "Oldest"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let store = store();
        let missing = "nope".to_string();
        assert_eq!(
            store.update(&missing, &record("Engineer", date(2024, 1, 1))).await,
            Err(StorageError::NotFound(missing.clone()))
        );
        assert_eq!(
            store.delete(&missing).await,
            Err(StorageError::NotFound(missing))
        );
    }

    #[tokio::test]
    async fn test_search() {
        let store = store();
        store
            .create(&record("Engineer", date(2024, 1, 1)).with_skills(["Kotlin"]))
            .await
            .unwrap();
        store.create(&record("Designer", date(2023, 1, 1))).await.unwrap();

        let hits = store.search("kotlin").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.job_title, "Engineer");
        assert_eq!(store.search("ACME").await.unwrap().len(), 2);
    }

    /// Hands out the same id every time
    struct FixedIdProvider;

    impl IdProvider for FixedIdProvider {
        fn generate_id(&self) -> JobId {
            "same".to_string()
        }
    }

    #[tokio::test]
    async fn test_create_batch_with_repeated_id_inserts_nothing() {
        let store = InMemoryJobStore::new(Arc::new(FixedIdProvider));
        let err = store
            .create_batch(&[
                record("First", date(2020, 1, 1)),
                record("Second", date(2022, 1, 1)),
            ])
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Constraint(_)));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_batch() {
        let store = store();
        let ids = store
            .create_batch(&[
                record("First", date(2020, 1, 1)),
                record("Second", date(2022, 1, 1)),
            ])
            .await
            .unwrap();
        assert_eq!(ids, vec!["job-1", "job-2"]);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
