//! Import/Export Codec
//!
//! Maps stored job records to the flat transfer file and back. Both
//! directions are pure; reading and writing the file is the caller's job.

pub mod error;
pub mod transfer;

pub use error::DecodeError;
pub use transfer::TransferRecord;

use serde_json::Value;

use crate::domain::JobRecord;

/// Default file name for an export
pub const EXPORT_FILE_NAME: &str = "jobs_export.json";

/// Serialize records into one pretty-printed JSON array.
///
/// Children are written in their sorted order.
pub fn encode<'a, I>(records: I) -> serde_json::Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let transfer: Vec<TransferRecord> = records.into_iter().map(TransferRecord::from).collect();
    serde_json::to_vec_pretty(&transfer)
}

/// Parse a transfer file into new (unsaved, unvalidated) records.
///
/// All-or-nothing: the first bad record aborts the whole decode.
pub fn decode(bytes: &[u8]) -> Result<Vec<JobRecord>, DecodeError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })?;

    let Value::Array(items) = document else {
        return Err(DecodeError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<TransferRecord>(item)
                .map(JobRecord::from)
                .map_err(|e| DecodeError::InvalidRecord {
                    index,
                    message: e.to_string(),
                })
        })
        .collect()
}
