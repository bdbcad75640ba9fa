//! Load/save of the workbook record
//!
//! The record is stored whole as JSON under a single key:
//! - Load once at start, replacing defaults
//! - Save only on explicit request, overwriting the previous value
//! - Malformed or unreadable data falls back to an empty record with a notice

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, StoragePort};

use crate::error::{LoadError, SaveError};
use crate::record::WorkbookRecord;

/// Why hydration fell back to the empty record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadNotice {
    /// Stored JSON did not parse as a record
    Malformed,
    /// Storage could not be read at all
    StorageUnavailable,
}

impl LoadNotice {
    pub fn message(&self) -> &'static str {
        match self {
            LoadNotice::Malformed => crate::labels::LOAD_MALFORMED,
            LoadNotice::StorageUnavailable => crate::labels::LOAD_UNAVAILABLE,
        }
    }
}

/// Result of hydration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub record: WorkbookRecord,
    pub notice: Option<LoadNotice>,
}

/// Persistence adapter over a storage backend
pub struct Persistence<S: StoragePort> {
    storage: S,
    key: String,
}

impl<S: StoragePort> Persistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored record, surfacing every failure
    ///
    /// An empty stored value counts as no record.
    pub fn try_load(&self) -> Result<Option<WorkbookRecord>, LoadError> {
        let Some(json) = self.storage.read(&self.key)?.filter(|json| !json.is_empty()) else {
            return Ok(None);
        };
        let record = serde_json::from_str(&json)?;
        Ok(Some(record))
    }

    /// Read the stored record, falling back to defaults
    pub fn load(&self) -> Loaded {
        match self.try_load() {
            Ok(Some(record)) => {
                log::info!("Loaded workbook from storage");
                Loaded {
                    record,
                    notice: None,
                }
            }
            Ok(None) => {
                log::info!("No saved workbook, starting empty");
                Loaded {
                    record: WorkbookRecord::default(),
                    notice: None,
                }
            }
            Err(LoadError::Malformed(e)) => {
                log::warn!("Ignoring malformed saved workbook: {}", e);
                Loaded {
                    record: WorkbookRecord::default(),
                    notice: Some(LoadNotice::Malformed),
                }
            }
            Err(LoadError::Storage(e)) => {
                log::warn!("{}", e);
                Loaded {
                    record: WorkbookRecord::default(),
                    notice: Some(LoadNotice::StorageUnavailable),
                }
            }
        }
    }

    /// Write the whole record, replacing any previous value
    pub fn save(&mut self, record: &WorkbookRecord) -> Result<(), SaveError> {
        let json = serde_json::to_string(record)?;
        self.storage.write(&self.key, &json)?;
        log::info!("Workbook saved ({} bytes)", json.len());
        Ok(())
    }
}
