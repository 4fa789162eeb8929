// ID Provider Port (for deterministic testing)

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::JobId;

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new unique job ID
    fn generate_id(&self) -> JobId;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> JobId {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Counter-based provider: `job-1`, `job-2`, ...
#[derive(Default)]
pub struct SequentialIdProvider {
    next: AtomicU64,
}

impl IdProvider for SequentialIdProvider {
    fn generate_id(&self) -> JobId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("job-{}", n)
    }
}
