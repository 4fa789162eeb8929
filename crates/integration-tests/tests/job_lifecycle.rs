//! Job lifecycle against SQLite: add, edit, search, delete, restart.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use jobfolio_core::application::JobService;
use jobfolio_core::domain::{JobDraft, ValidationError};
use jobfolio_core::port::{JobStore, StorageError, UuidProvider};
use jobfolio_core::AppError;
use jobfolio_infra_sqlite::{create_pool, run_migrations, SqliteJobStore};
use sqlx::SqlitePool;

async fn setup() -> (SqlitePool, JobService) {
    let pool = create_pool(":memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let store: Arc<dyn JobStore> = Arc::new(SqliteJobStore::new(pool.clone(), Arc::new(UuidProvider)));
    (pool, JobService::new(store))
}

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn draft(title: &str, company: &str, start: DateTime<Utc>) -> JobDraft {
    JobDraft::new(title, company, start, start + Duration::days(180))
        .with_descriptions(["Built X", "Mentored interns"])
        .with_skills(["Go", "Postgres"])
}

async fn child_rows(pool: &SqlitePool) -> (i64, i64) {
    let descriptions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM descriptions")
        .fetch_one(pool)
        .await
        .unwrap();
    let skills: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills")
        .fetch_one(pool)
        .await
        .unwrap();
    (descriptions, skills)
}

/// Valid draft is stored with sorted children
#[tokio::test]
async fn test_add_and_show() {
    let (_pool, service) = setup().await;

    let draft = JobDraft::new("Engineer", "Acme", day(2024, 1, 1), day(2024, 1, 2))
        .with_descriptions(["Built X"])
        .with_skills(["Go"]);
    let id = service.add(&draft).await.unwrap();
    assert!(!id.is_empty());

    let job = service.get(&id).await.unwrap();
    assert_eq!(job.record.job_title, "Engineer");
    assert_eq!(job.sorted_descriptions()[0].text, "Built X");
    assert_eq!(job.sorted_skills()[0].name, "Go");
}

/// First failing rule wins and nothing reaches the database
#[tokio::test]
async fn test_invalid_draft_rejected_before_storage() {
    let (pool, service) = setup().await;

    let draft = JobDraft::new("SW", "C", day(2024, 1, 2), day(2024, 1, 1));
    let err = service.add(&draft).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::TitleOrCompanyTooShort)
    ));

    let jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(jobs, 0);
}

/// Edit overwrites scalars and replaces both child collections
#[tokio::test]
async fn test_edit_replaces_record() {
    let (pool, service) = setup().await;
    let id = service
        .add(&draft("Engineer", "Acme", day(2021, 1, 1)))
        .await
        .unwrap();

    let edited = JobDraft::new("Lead Engineer", "Acme Labs", day(2021, 2, 1), day(2022, 2, 1))
        .with_descriptions(["Led platform team"])
        .with_skills(["Rust"]);
    service.edit(&id, &edited).await.unwrap();

    let job = service.get(&id).await.unwrap();
    assert_eq!(job.record.job_title, "Lead Engineer");
    assert_eq!(job.record.company, "Acme Labs");
    assert_eq!(job.record.start_date, day(2021, 2, 1));
    assert_eq!(child_rows(&pool).await, (1, 1));
}

/// Listing is newest start date first; search is case-insensitive OR
#[tokio::test]
async fn test_list_and_search() {
    let (_pool, service) = setup().await;
    service.add(&draft("Intern", "Initech", day(2016, 6, 1))).await.unwrap();
    service.add(&draft("Engineer", "Globex", day(2019, 3, 1))).await.unwrap();
    service
        .add(
            &JobDraft::new("Architect", "Umbrella", day(2023, 9, 1), day(2024, 9, 1))
                .with_descriptions(["Designed event bus"])
                .with_skills(["Kafka"]),
        )
        .await
        .unwrap();

    let titles: Vec<String> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|j| j.record.job_title)
        .collect();
    assert_eq!(titles, vec!["Architect", "Engineer", "Intern"]);

    // title
    assert_eq!(service.search("ARCHI").await.unwrap().len(), 1);
    // company
    assert_eq!(service.search("globex").await.unwrap().len(), 1);
    // description
    assert_eq!(service.search("event BUS").await.unwrap().len(), 1);
    // skill, shared by two jobs
    assert_eq!(service.search("postgres").await.unwrap().len(), 2);
    assert!(service.search("fortran").await.unwrap().is_empty());
}

/// Delete removes the job and every owned child row
#[tokio::test]
async fn test_delete_cascades() {
    let (pool, service) = setup().await;
    let keep = service.add(&draft("Engineer", "Acme", day(2020, 1, 1))).await.unwrap();
    let gone = service.add(&draft("Analyst", "Acme", day(2021, 1, 1))).await.unwrap();

    service.delete(&gone).await.unwrap();

    assert_eq!(child_rows(&pool).await, (2, 2));
    assert!(service.get(&keep).await.is_ok());
    assert!(matches!(
        service.get(&gone).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        service.delete(&gone).await.unwrap_err(),
        AppError::Storage(StorageError::NotFound(_))
    ));
}

/// Jobs survive closing and reopening the database file
#[tokio::test]
async fn test_persistence_after_restart() {
    let db_path = std::env::temp_dir().join(format!("jobfolio_restart_{}.db", std::process::id()));
    let db_url = db_path.to_string_lossy().into_owned();
    let _ = std::fs::remove_file(&db_path);

    let id = {
        let pool = create_pool(&db_url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let service = JobService::new(Arc::new(SqliteJobStore::new(pool.clone(), Arc::new(UuidProvider))));
        let id = service.add(&draft("Engineer", "Acme", day(2022, 1, 1))).await.unwrap();
        pool.close().await;
        id
    };

    {
        let pool = create_pool(&db_url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let service = JobService::new(Arc::new(SqliteJobStore::new(pool.clone(), Arc::new(UuidProvider))));

        let job = service.get(&id).await.unwrap();
        assert_eq!(job.record.job_title, "Engineer");
        assert_eq!(job.record.descriptions.len(), 2);
        pool.close().await;
    }

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", db_url, suffix));
    }
}
