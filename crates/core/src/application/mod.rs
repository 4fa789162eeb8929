// Application Layer - Use Cases

pub mod job_task;
pub mod resume;

// Re-exports
pub use job_task::JobService;
pub use resume::ResumeDocument;
