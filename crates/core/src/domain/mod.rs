// Domain Layer - Pure business logic and entities

pub mod error;
pub mod job;
pub mod validation;

// Re-exports
pub use error::ValidationError;
pub use job::{Description, Job, JobId, JobRecord, Skill};
pub use validation::{validate, JobDraft, ValidJob};
