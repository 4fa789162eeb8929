// SQLite JobStore Implementation

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jobfolio_core::domain::{Description, Job, JobId, JobRecord, Skill};
use jobfolio_core::port::{IdProvider, JobStore, StorageError, StorageResult};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::map_sqlx_error;

pub struct SqliteJobStore {
    pool: SqlitePool,
    id_provider: Arc<dyn IdProvider>,
}

impl SqliteJobStore {
    pub fn new(pool: SqlitePool, id_provider: Arc<dyn IdProvider>) -> Self {
        Self { pool, id_provider }
    }

    /// Load every job with its children, newest start date first.
    ///
    /// The three reads share one transaction so a concurrent write cannot
    /// land between them.
    async fn load_all(&self) -> StorageResult<Vec<Job>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let rows: Vec<JobRow> = sqlx::query_as(
            r#"
            SELECT id, job_title, company, start_date, end_date
            FROM jobs
            ORDER BY start_date DESC, rowid ASC
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let mut descriptions = group_children(
            sqlx::query_as("SELECT job_id, text AS value FROM descriptions ORDER BY id")
                .fetch_all(&mut *tx)
                .await
                .map_err(map_sqlx_error)?,
        );
        let mut skills = group_children(
            sqlx::query_as("SELECT job_id, name AS value FROM skills ORDER BY id")
                .fetch_all(&mut *tx)
                .await
                .map_err(map_sqlx_error)?,
        );

        tx.commit().await.map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|row| {
                let job_descriptions = descriptions.remove(&row.id).unwrap_or_default();
                let job_skills = skills.remove(&row.id).unwrap_or_default();
                row.into_job(job_descriptions, job_skills)
            })
            .collect()
    }
}

// Millisecond precision is what the schema stores
fn to_millis(ts: &DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}

fn from_millis(ms: i64) -> StorageResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| StorageError::Backend(format!("Invalid stored timestamp: {}", ms)))
}

fn group_children(rows: Vec<ChildRow>) -> HashMap<String, Vec<String>> {
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    for row in rows {
        grouped.entry(row.job_id).or_default().push(row.value);
    }
    grouped
}

async fn insert_children(
    conn: &mut SqliteConnection,
    id: &JobId,
    record: &JobRecord,
) -> StorageResult<()> {
    for description in &record.descriptions {
        sqlx::query("INSERT INTO descriptions (job_id, text) VALUES (?, ?)")
            .bind(id)
            .bind(&description.text)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
    }

    for skill in &record.skills {
        sqlx::query("INSERT INTO skills (job_id, name) VALUES (?, ?)")
            .bind(id)
            .bind(&skill.name)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
    }

    Ok(())
}

async fn delete_children(conn: &mut SqliteConnection, id: &JobId) -> StorageResult<()> {
    sqlx::query("DELETE FROM descriptions WHERE job_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;

    sqlx::query("DELETE FROM skills WHERE job_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;

    Ok(())
}

async fn insert_job(conn: &mut SqliteConnection, id: &JobId, record: &JobRecord) -> StorageResult<()> {
    sqlx::query(
        r#"
        INSERT INTO jobs (id, job_title, company, start_date, end_date)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(&record.job_title)
    .bind(&record.company)
    .bind(to_millis(&record.start_date))
    .bind(to_millis(&record.end_date))
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx_error)?;

    insert_children(conn, id, record).await
}

#[async_trait]
impl JobStore for SqliteJobStore {
    async fn create(&self, record: &JobRecord) -> StorageResult<JobId> {
        let id = self.id_provider.generate_id();

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        insert_job(&mut tx, &id, record).await?;
        tx.commit().await.map_err(map_sqlx_error)?;

        debug!(job_id = %id, "Job row inserted");
        Ok(id)
    }

    async fn create_batch(&self, records: &[JobRecord]) -> StorageResult<Vec<JobId>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let mut ids = Vec::with_capacity(records.len());

        for record in records {
            let id = self.id_provider.generate_id();
            insert_job(&mut tx, &id, record).await?;
            ids.push(id);
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        debug!(count = ids.len(), "Job batch inserted");
        Ok(ids)
    }

    async fn find_by_id(&self, id: &JobId) -> StorageResult<Option<Job>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let row: Option<JobRow> = sqlx::query_as(
            "SELECT id, job_title, company, start_date, end_date FROM jobs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let descriptions: Vec<String> =
            sqlx::query_scalar("SELECT text FROM descriptions WHERE job_id = ? ORDER BY id")
                .bind(id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

        let skills: Vec<String> =
            sqlx::query_scalar("SELECT name FROM skills WHERE job_id = ? ORDER BY id")
                .bind(id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        row.into_job(descriptions, skills).map(Some)
    }

    async fn update(&self, id: &JobId, record: &JobRecord) -> StorageResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET job_title = ?, company = ?, start_date = ?, end_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.job_title)
        .bind(&record.company)
        .bind(to_millis(&record.start_date))
        .bind(to_millis(&record.end_date))
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        // Dropping the transaction rolls it back
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id.clone()));
        }

        delete_children(&mut tx, id).await?;
        insert_children(&mut tx, id, record).await?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn delete(&self, id: &JobId) -> StorageResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Children first: the cascade is explicit
        delete_children(&mut tx, id).await?;

        let result = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id.clone()));
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn list_all(&self) -> StorageResult<Vec<Job>> {
        self.load_all().await
    }

    async fn search(&self, needle: &str) -> StorageResult<Vec<Job>> {
        // SQLite's LIKE/lower() only fold ASCII; match in Rust so every store
        // shares the same case-insensitive semantics.
        let jobs = self.load_all().await?;
        Ok(jobs
            .into_iter()
            .filter(|job| job.record.matches(needle))
            .collect())
    }
}

/// SQLite row representation of a job (children loaded separately)
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: String,
    job_title: String,
    company: String,
    start_date: i64,
    end_date: i64,
}

impl JobRow {
    fn into_job(self, descriptions: Vec<String>, skills: Vec<String>) -> StorageResult<Job> {
        let record = JobRecord {
            job_title: self.job_title,
            company: self.company,
            start_date: from_millis(self.start_date)?,
            end_date: from_millis(self.end_date)?,
            descriptions: descriptions.into_iter().map(Description::new).collect(),
            skills: skills.into_iter().map(Skill::new).collect(),
        };
        Ok(Job::new(self.id, record))
    }
}

/// One description or skill value keyed by its owning job
#[derive(Debug, sqlx::FromRow)]
struct ChildRow {
    job_id: String,
    value: String,
}
