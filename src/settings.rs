//! Workbook settings
//!
//! Fixed at startup; not persisted.

use crate::consts::{SAVE_ACK_MS, STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// LocalStorage key for the record
    pub storage_key: String,
    /// How long the save acknowledgment stays visible (ms)
    pub save_ack_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            save_ack_ms: SAVE_ACK_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.storage_key, "calculus_workbook_data");
        assert_eq!(settings.save_ack_ms, 2000);
    }
}
