//! Suspend timeout table
//!
//! Maps the UI dropdown index onto an inactivity timeout. The last entry
//! ("never") and any index outside the table both disable auto-dim.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inactivity timeout before the backlight is dimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SuspendTimeout {
    /// Dim once inactivity exceeds this many milliseconds
    After(u32),
    /// Never dim
    Disabled,
}

/// Dropdown index -> timeout
pub const SUSPEND_TIMEOUTS: [SuspendTimeout; 6] = [
    SuspendTimeout::After(15_000),  // 15 s
    SuspendTimeout::After(30_000),  // 30 s
    SuspendTimeout::After(60_000),  // 1 min
    SuspendTimeout::After(120_000), // 2 min
    SuspendTimeout::After(300_000), // 5 min
    SuspendTimeout::Disabled,       // never
];

impl SuspendTimeout {
    /// Look up a dropdown index; anything unmapped disables suspension
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| SUSPEND_TIMEOUTS.get(i).copied())
            .unwrap_or(SuspendTimeout::Disabled)
    }

    /// Timeout in milliseconds, `None` when disabled
    pub fn as_millis(&self) -> Option<u32> {
        match self {
            SuspendTimeout::After(ms) => Some(*ms),
            SuspendTimeout::Disabled => None,
        }
    }

    /// Check if auto-dim is disabled
    pub fn is_disabled(&self) -> bool {
        matches!(self, SuspendTimeout::Disabled)
    }

    /// Check if `inactive_ms` is strictly past the timeout
    pub fn is_expired(&self, inactive_ms: u32) -> bool {
        match self {
            SuspendTimeout::After(ms) => inactive_ms > *ms,
            SuspendTimeout::Disabled => false,
        }
    }
}
