// SQLite Connection Pool Setup

use std::str::FromStr;
use std::time::Duration;

use jobfolio_core::port::StorageResult;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::error::map_sqlx_error;

/// Create SQLite connection pool with WAL mode and foreign keys enabled.
///
/// In-memory databases live per connection, so they get a single
/// connection that is never recycled.
pub async fn create_pool(database_url: &str) -> StorageResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(map_sqlx_error)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true)
        .create_if_missing(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)?;

    tracing::debug!(database_url, "SQLite pool ready");
    Ok(pool)
}
