// Jobfolio Infrastructure - SQLite Adapter
// Implements: JobStore

mod connection;
mod error;
mod job_store;
mod migration;

pub use connection::create_pool;
pub use job_store::SqliteJobStore;
pub use migration::run_migrations;

// Note: sqlx::Error conversion lives in `error::map_sqlx_error` because the
// orphan rule forbids `From<sqlx::Error> for StorageError` here
