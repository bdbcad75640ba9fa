//! Calculus Workbook - a single-page goal-planning worksheet
//!
//! Core modules:
//! - `record`: The workbook record and its enumerated fields
//! - `store`: Field-by-field updates of the current record
//! - `projection`: Yearly projection from the weekly frequency
//! - `persistence`: Load/save through an injectable storage port
//! - `ack`: Transient "saved" indicator with a restartable deadline
//! - `view`: What the page shows for a given record
//! - `platform`: Browser capabilities (print, timers)

pub mod ack;
pub mod error;
pub mod labels;
pub mod persistence;
pub mod platform;
pub mod projection;
pub mod record;
pub mod settings;
pub mod store;
pub mod view;
pub mod workbook;

pub use error::{LoadError, SaveError, StorageError};
pub use record::{ActionUnit, Reachability, Weekday, WorkbookRecord};
pub use settings::Settings;
pub use store::{FieldUpdate, WorkbookStore};
pub use workbook::Workbook;

/// Workbook constants
pub mod consts {
    /// LocalStorage key holding the serialized record
    pub const STORAGE_KEY: &str = "calculus_workbook_data";
    /// Weeks used to turn a weekly frequency into a yearly total
    pub const WEEKS_PER_YEAR: f64 = 52.0;
    /// How long the save acknowledgment stays visible (ms)
    pub const SAVE_ACK_MS: u32 = 2000;
    /// Days in the weekly log
    pub const DAYS_PER_WEEK: usize = 7;
}
