// Export / Import Use Cases

use tracing::{info, warn};

use crate::codec;
use crate::domain::{validate, JobDraft, JobId, JobRecord};
use crate::error::Result;
use crate::port::JobStore;

/// Serialize every stored job into a transfer file blob
pub async fn export(store: &dyn JobStore) -> Result<Vec<u8>> {
    let jobs = store.list_all().await?;
    let bytes = codec::encode(jobs.iter().map(|job| &job.record))?;

    info!(jobs = jobs.len(), bytes = bytes.len(), "Jobs exported");
    Ok(bytes)
}

/// Decode a transfer file and store every record as a new job.
///
/// The whole file is decoded before the store is touched, so a bad file
/// leaves the store untouched. Imported records are NOT validated; records
/// that the add/edit forms would reject are stored anyway and only counted
/// in the log.
pub async fn import(store: &dyn JobStore, bytes: &[u8]) -> Result<Vec<JobId>> {
    let records = codec::decode(bytes).map_err(|e| {
        warn!(error = %e, "Import rejected");
        e
    })?;

    if records.is_empty() {
        info!("Import file contained no jobs");
        return Ok(Vec::new());
    }

    let unvalidated = count_unvalidated(&records);
    if unvalidated > 0 {
        warn!(
            records = unvalidated,
            "Importing records that would fail form validation"
        );
    }

    let ids = store.create_batch(&records).await?;

    info!(jobs = ids.len(), "Jobs imported");
    Ok(ids)
}

fn count_unvalidated(records: &[JobRecord]) -> usize {
    records
        .iter()
        .filter(|record| validate(&JobDraft::from_record(record)).is_err())
        .count()
}
