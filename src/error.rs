//! Error types for loading and saving the workbook
//!
//! Nothing here is retried. Load failures fall back to an empty record,
//! save failures are shown on the save button.

use thiserror::Error;

/// Failure of the underlying storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Stored data could not be turned into a record
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Stored workbook is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Record could not be written
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to serialize workbook: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
