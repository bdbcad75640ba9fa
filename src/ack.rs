//! Save acknowledgment indicator
//!
//! After a save the button shows "saved" (or "failed") until a fixed interval
//! has passed. Each new save restarts the interval from the new save time.

use crate::consts::SAVE_ACK_MS;

/// What the save button currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AckStatus {
    #[default]
    Idle,
    Saved,
    Failed,
}

/// Indicator state plus its reset deadline
#[derive(Debug, Clone)]
pub struct SaveAck {
    status: AckStatus,
    /// Time (ms) at which a non-idle status reverts to idle
    deadline: Option<f64>,
    interval_ms: u32,
}

impl Default for SaveAck {
    fn default() -> Self {
        Self::new(SAVE_ACK_MS)
    }
}

impl SaveAck {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            status: AckStatus::Idle,
            deadline: None,
            interval_ms,
        }
    }

    pub fn status(&self) -> AckStatus {
        self.status
    }

    /// Show `status` and (re)start the reset interval from `now`
    pub fn arm(&mut self, status: AckStatus, now: f64) {
        self.status = status;
        self.deadline = match status {
            AckStatus::Idle => None,
            _ => Some(now + f64::from(self.interval_ms)),
        };
    }

    /// Whole milliseconds from `now` until the deadline, rounded up
    pub fn remaining_ms(&self, now: f64) -> Option<u32> {
        let deadline = self.deadline?;
        let remaining = (deadline - now).max(0.0).ceil();
        Some(remaining.min(f64::from(u32::MAX)) as u32)
    }

    /// Clear the indicator once `now` has reached the deadline
    ///
    /// Returns true if the indicator changed.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.status = AckStatus::Idle;
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
