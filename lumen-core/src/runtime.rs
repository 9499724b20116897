//! Tick runtime
//!
//! One call to [`Runtime::tick`] is one cycle of the cooperative loop:
//!
//! ```text
//! clock ─► touch.poll ─► middleware input ─► middleware repaint ─► flush
//!                                                       │
//!            next delay ◄─ power.evaluate ◄─ settings sync
//! ```
//!
//! Nothing runs concurrently. The board's outer loop sleeps for
//! [`TickReport::next_delay_ms`] and feeds its watchdog between ticks.

use lumen_display::FlushAdapter;
use lumen_hal::{BitmapPanel, InputPin, MonotonicClock};

use crate::config::{RuntimeConfig, TickConfig};
use crate::power::{PowerController, PowerTransition};
use crate::touch::{CalibratedPoint, TouchChannel};
use crate::traits::{BacklightActuator, TouchDigitizer};

/// Settings the UI currently shows (brightness slider, suspend dropdown)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UserSettings {
    /// Brightness slider value (0-100%)
    pub brightness_percent: i32,
    /// Suspend timeout dropdown index
    pub suspend_index: i32,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            brightness_percent: 100,
            suspend_index: 0,
        }
    }
}

/// Graphics middleware driven by the runtime
///
/// The middleware owns the UI, the draw buffers and the inactivity clock.
pub trait GraphicsMiddleware {
    /// Deliver this tick's pointer state (single point, press/release)
    fn pointer_input(&mut self, point: CalibratedPoint);

    /// Run timers and the repaint pass
    ///
    /// Every damaged area is handed to `flush` as a dirty region. Returns
    /// the number of milliseconds until the middleware's next timer.
    fn refresh<P: BitmapPanel>(&mut self, flush: &mut FlushAdapter<P>) -> u32;

    /// Milliseconds since the last accepted input event
    fn inactive_ms(&self) -> u32;

    /// Current UI values of the brightness and suspend controls
    fn user_settings(&self) -> UserSettings;
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Pointer state delivered to the middleware
    pub point: CalibratedPoint,
    /// Power state change, if any
    pub transition: PowerTransition,
    /// How long the outer loop should wait before the next tick
    pub next_delay_ms: u32,
}

/// Device I/O runtime
pub struct Runtime<L, D, P, B, C> {
    touch: TouchChannel<L, D>,
    flush: FlushAdapter<P>,
    power: PowerController<B>,
    clock: C,
    tick: TickConfig,
}

impl<L, D, P, B, C> Runtime<L, D, P, B, C>
where
    L: InputPin,
    D: TouchDigitizer,
    P: BitmapPanel,
    B: BacklightActuator,
    C: MonotonicClock,
{
    /// Assemble the runtime from its peripherals
    ///
    /// The backlight is switched on at the configured default brightness.
    pub fn new(
        config: RuntimeConfig,
        contact: L,
        digitizer: D,
        panel: P,
        backlight: B,
        clock: C,
    ) -> Self {
        Self {
            touch: TouchChannel::new(contact, digitizer, config.touch, config.panel),
            flush: FlushAdapter::new(panel),
            power: PowerController::new(backlight, &config.backlight),
            clock,
            tick: config.tick,
        }
    }

    /// Run one cycle: input, repaint, settings sync, power
    pub fn tick<M: GraphicsMiddleware>(&mut self, ui: &mut M) -> TickReport {
        let now_us = self.clock.now_us();

        let point = self.touch.poll(now_us);
        ui.pointer_input(point);

        let until_next_ms = ui.refresh(&mut self.flush);

        let settings = ui.user_settings();
        self.power.set_timeout(settings.suspend_index);
        self.power.set_manual_brightness(settings.brightness_percent);

        let transition = self.power.evaluate(ui.inactive_ms());

        TickReport {
            point,
            transition,
            next_delay_ms: self.tick.clamp_delay(until_next_ms),
        }
    }

    /// Get the touch channel
    pub fn touch(&self) -> &TouchChannel<L, D> {
        &self.touch
    }

    /// Mutable access to the touch channel (recalibration)
    pub fn touch_mut(&mut self) -> &mut TouchChannel<L, D> {
        &mut self.touch
    }

    /// Get the flush adapter
    pub fn flush(&self) -> &FlushAdapter<P> {
        &self.flush
    }

    /// Get the power controller
    pub fn power(&self) -> &PowerController<B> {
        &self.power
    }

    /// Mutable access to the power controller
    pub fn power_mut(&mut self) -> &mut PowerController<B> {
        &mut self.power
    }

    /// Get the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
