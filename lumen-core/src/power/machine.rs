//! Power state machine definition
//!
//! The physical backlight output is a function of the current state and
//! the manual brightness level; the controller applies it.

use super::timeout::SuspendTimeout;

/// Backlight power states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Backlight shows the manual brightness level
    #[default]
    Awake,
    /// Backlight forced off after inactivity
    Dimmed,
}

impl PowerState {
    /// Check if the backlight is forced off
    pub fn is_dimmed(&self) -> bool {
        matches!(self, PowerState::Dimmed)
    }

    /// Compute the next state for the current inactivity duration
    ///
    /// - `Awake -> Dimmed` once the timeout is enabled and exceeded
    /// - `Dimmed -> Awake` once inactivity is back within the timeout, or
    ///   as soon as the timeout is disabled
    pub fn next(self, timeout: SuspendTimeout, inactive_ms: u32) -> Self {
        use PowerState::*;

        match (self, timeout.is_expired(inactive_ms)) {
            (Awake, true) => Dimmed,
            (Dimmed, false) => Awake,
            // Default: stay in current state
            (state, _) => state,
        }
    }
}
