// Transfer File Decode Errors

use thiserror::Error;

/// A transfer file that cannot be imported. Nothing is stored when this is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed JSON at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Transfer file must contain a JSON array of job records")]
    NotAnArray,

    #[error("Invalid job record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },
}

impl DecodeError {
    /// Index of the offending record, when the failure is record-specific
    pub fn record_index(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidRecord { index, .. } => Some(*index),
            _ => None,
        }
    }
}
