// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod job_store;
pub mod memory_store;

// Re-exports
pub use id_provider::{IdProvider, SequentialIdProvider, UuidProvider};
pub use job_store::{JobStore, StorageError, StorageResult};
pub use memory_store::InMemoryJobStore;
