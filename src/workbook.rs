//! Workbook controller
//!
//! Owns the store, the persistence adapter and the save indicator. The page
//! calls into it from event handlers and re-renders from [`Workbook::view`].

use crate::ack::{AckStatus, SaveAck};
use crate::error::SaveError;
use crate::persistence::{LoadNotice, Persistence, StoragePort};
use crate::record::WorkbookRecord;
use crate::settings::Settings;
use crate::store::{FieldUpdate, WorkbookStore};
use crate::view::WorkbookView;

/// Outcome of an explicit save
#[derive(Debug)]
pub struct SaveOutcome {
    /// Delay (ms) after which the page calls [`Workbook::tick`]
    pub reset_after_ms: u32,
    pub result: Result<(), SaveError>,
}

pub struct Workbook<S: StoragePort> {
    store: WorkbookStore,
    persistence: Persistence<S>,
    ack: SaveAck,
    load_notice: Option<LoadNotice>,
}

impl<S: StoragePort> Workbook<S> {
    /// Create and hydrate from storage
    pub fn start(storage: S, settings: &Settings) -> Self {
        let persistence = Persistence::new(storage, settings.storage_key.clone());
        let loaded = persistence.load();
        Self {
            store: WorkbookStore::new(loaded.record),
            persistence,
            ack: SaveAck::new(settings.save_ack_ms),
            load_notice: loaded.notice,
        }
    }

    pub fn record(&self) -> &WorkbookRecord {
        self.store.record()
    }

    pub fn load_notice(&self) -> Option<LoadNotice> {
        self.load_notice
    }

    pub fn dismiss_notice(&mut self) {
        self.load_notice = None;
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        self.store.apply(update);
    }

    /// Persist the current record and arm the indicator
    pub fn save(&mut self, now: f64) -> SaveOutcome {
        let result = self.persistence.save(self.store.record());
        let status = match &result {
            Ok(()) => AckStatus::Saved,
            Err(e) => {
                log::error!("Save failed: {}", e);
                AckStatus::Failed
            }
        };
        self.ack.arm(status, now);
        SaveOutcome {
            reset_after_ms: self.ack.remaining_ms(now).unwrap_or(0),
            result,
        }
    }

    /// Reset timer callback; true if the page must re-render
    ///
    /// The indicator clears only once `now` reaches the latest save's deadline.
    pub fn tick(&mut self, now: f64) -> bool {
        self.ack.poll(now)
    }

    pub fn view(&self) -> WorkbookView {
        WorkbookView::build(self.store.record(), &self.ack)
    }
}
