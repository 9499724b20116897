//! Configuration type definitions
//!
//! Defaults describe a 4.3" 480x272 RGB panel with an XPT2046 resistive
//! digitizer and a 10-bit PWM backlight channel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of back-to-back reads averaged per axis on each touch poll
pub const TOUCH_SAMPLES: usize = 4;

/// Largest raw digitizer reading (12-bit ADC)
pub const TOUCH_RAW_MAX: u16 = 4095;

/// Panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Horizontal resolution in pixels
    pub width: u16,
    /// Vertical resolution in pixels
    pub height: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 272,
        }
    }
}

/// Factory calibration anchors for one digitizer axis
///
/// `raw_min` maps to coordinate 0, `raw_max` maps to the panel resolution
/// (and is then clamped to the last pixel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisCalibration {
    pub raw_min: u16,
    pub raw_max: u16,
}

impl AxisCalibration {
    pub const fn new(raw_min: u16, raw_max: u16) -> Self {
        Self { raw_min, raw_max }
    }
}

/// Calibration for both digitizer axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchCalibration {
    pub x: AxisCalibration,
    pub y: AxisCalibration,
}

impl Default for TouchCalibration {
    fn default() -> Self {
        Self {
            x: AxisCalibration::new(200, 3900),
            y: AxisCalibration::new(240, 3800),
        }
    }
}

/// Touch sampling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchConfig {
    /// Raw-to-screen calibration anchors
    pub calibration: TouchCalibration,
    /// How long the contact line must stay asserted before a touch counts (µs)
    pub debounce_us: u32,
    /// Contact line is asserted when low (XPT2046 PENIRQ)
    pub contact_active_low: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            calibration: TouchCalibration::default(),
            debounce_us: 5_000,
            contact_active_low: true,
        }
    }
}

/// Backlight defaults applied at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BacklightConfig {
    /// Manual brightness at boot (0-100%)
    pub default_percent: u8,
    /// Suspend timeout table index at boot (see `power::SUSPEND_TIMEOUTS`)
    pub default_timeout_index: i32,
}

impl Default for BacklightConfig {
    fn default() -> Self {
        Self {
            default_percent: 100,
            default_timeout_index: 0, // 15 s
        }
    }
}

/// Bounds on the delay between runtime ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickConfig {
    /// Never sleep less than this, so lower-priority work gets to run
    pub min_delay_ms: u32,
    /// Never sleep longer than this, so touch stays responsive
    pub max_delay_ms: u32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1,
            max_delay_ms: 10,
        }
    }
}

impl TickConfig {
    /// Clamp the middleware's "time until next timer" into the tick bounds
    pub fn clamp_delay(&self, until_next_ms: u32) -> u32 {
        until_next_ms.max(self.min_delay_ms).min(self.max_delay_ms)
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuntimeConfig {
    pub panel: PanelConfig,
    pub touch: TouchConfig,
    pub backlight: BacklightConfig,
    pub tick: TickConfig,
}
