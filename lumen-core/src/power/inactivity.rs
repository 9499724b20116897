//! Inactivity tracking
//!
//! Most graphics middlewares keep their own "time since last input"; this
//! tracker is for those that do not.

use crate::touch::CalibratedPoint;

/// Time since the last accepted input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InactivityClock {
    last_activity_us: u64,
}

impl InactivityClock {
    /// Start tracking, treating `now_us` as the last activity
    pub const fn new(now_us: u64) -> Self {
        Self {
            last_activity_us: now_us,
        }
    }

    /// Record an input event at `now_us`
    pub fn record_activity(&mut self, now_us: u64) {
        self.last_activity_us = self.last_activity_us.max(now_us);
    }

    /// Record activity if `point` is pressed
    pub fn observe(&mut self, point: &CalibratedPoint, now_us: u64) {
        if point.pressed {
            self.record_activity(now_us);
        }
    }

    /// Milliseconds since the last activity, saturating at `u32::MAX`
    pub fn inactive_ms(&self, now_us: u64) -> u32 {
        let elapsed_ms = now_us.saturating_sub(self.last_activity_us) / 1000;
        u32::try_from(elapsed_ms).unwrap_or(u32::MAX)
    }
}
