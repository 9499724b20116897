//! Debounced, oversampled touch channel
//!
//! Polled once per tick:
//!
//! 1. Contact line not asserted: report released (the common, cheap path).
//! 2. Asserted, but not yet for the whole hold-off window: report released.
//!    The window is measured against the tick's clock sample, so the
//!    channel never sleeps.
//! 3. Confirmed: average `TOUCH_SAMPLES` reads of each axis, calibrate,
//!    clamp, and report pressed.
//!
//! Bus failures while averaging count as a zero reading. A slightly jittery
//! point is preferred over stalling the input path.

use lumen_hal::InputPin;

use super::calibration::map_sample;
use crate::config::{PanelConfig, TouchConfig, TOUCH_SAMPLES};
use crate::traits::{Axis, TouchDigitizer};

/// Raw averaged digitizer reading for both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    pub x: u16,
    pub y: u16,
}

/// Calibrated pointer state for one tick
///
/// Coordinates are always within the panel. A released point keeps the
/// coordinates of the last press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibratedPoint {
    pub x: u16,
    pub y: u16,
    pub pressed: bool,
}

/// Touch sampling channel over a contact line and a digitizer
pub struct TouchChannel<L, D> {
    contact: L,
    digitizer: D,
    config: TouchConfig,
    panel: PanelConfig,
    /// Clock sample at which the current assertion was first seen
    contact_since_us: Option<u64>,
    last: CalibratedPoint,
    bus_errors: u32,
}

impl<L: InputPin, D: TouchDigitizer> TouchChannel<L, D> {
    /// Create a new touch channel
    ///
    /// # Arguments
    /// - `contact`: Digitizer pen-interrupt line
    /// - `digitizer`: Bus-level digitizer driver
    /// - `config`: Calibration, hold-off and line polarity
    /// - `panel`: Screen resolution the coordinates are mapped onto
    pub fn new(contact: L, digitizer: D, config: TouchConfig, panel: PanelConfig) -> Self {
        Self {
            contact,
            digitizer,
            config,
            panel,
            contact_since_us: None,
            last: CalibratedPoint::default(),
            bus_errors: 0,
        }
    }

    /// Poll the digitizer once
    ///
    /// `now_us` is the tick's monotonic clock sample.
    pub fn poll(&mut self, now_us: u64) -> CalibratedPoint {
        if !self.contact_asserted() {
            self.contact_since_us = None;
            return self.released();
        }

        let since = *self.contact_since_us.get_or_insert(now_us);
        if now_us.saturating_sub(since) < self.config.debounce_us as u64 {
            return self.released();
        }

        let sample = self.sample();
        let (x, y) = map_sample(sample, &self.config.calibration, &self.panel);

        self.last = CalibratedPoint { x, y, pressed: true };
        self.last
    }

    /// Average `TOUCH_SAMPLES` back-to-back reads of each axis
    pub fn sample(&mut self) -> TouchSample {
        let mut sum_x: u32 = 0;
        let mut sum_y: u32 = 0;

        for _ in 0..TOUCH_SAMPLES {
            sum_x += self.read(Axis::X) as u32;
            sum_y += self.read(Axis::Y) as u32;
        }

        TouchSample {
            x: (sum_x / TOUCH_SAMPLES as u32) as u16,
            y: (sum_y / TOUCH_SAMPLES as u32) as u16,
        }
    }

    /// Number of digitizer transactions that failed since creation
    pub fn bus_errors(&self) -> u32 {
        self.bus_errors
    }

    /// Last reported pointer state
    pub fn last_point(&self) -> CalibratedPoint {
        self.last
    }

    /// Get the configuration
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Replace the calibration and hold-off settings
    pub fn set_config(&mut self, config: TouchConfig) {
        self.config = config;
    }

    /// Release the contact line and digitizer
    pub fn release(self) -> (L, D) {
        (self.contact, self.digitizer)
    }

    fn contact_asserted(&mut self) -> bool {
        if self.config.contact_active_low {
            self.contact.is_low()
        } else {
            self.contact.is_high()
        }
    }

    fn read(&mut self, axis: Axis) -> u16 {
        match self.digitizer.read_axis(axis) {
            Ok(raw) => raw,
            Err(_) => {
                self.bus_errors = self.bus_errors.wrapping_add(1);
                0
            }
        }
    }

    fn released(&mut self) -> CalibratedPoint {
        self.last.pressed = false;
        self.last
    }
}
