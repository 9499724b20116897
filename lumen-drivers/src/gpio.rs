//! `embedded-hal` input pin adapter
//!
//! Chip HALs expose fallible pin reads; the runtime polls an infallible
//! [`lumen_hal::InputPin`]. A failed read is reported as the line's idle
//! level so a flaky pin never fabricates a touch.

use embedded_hal::digital::InputPin as HalInputPin;

/// Contact line backed by an `embedded-hal` input pin
pub struct ContactLine<P> {
    pin: P,
    /// Level reported when a read fails
    idle_high: bool,
}

impl<P: HalInputPin> ContactLine<P> {
    /// Line that idles high (open-drain pen interrupt with pull-up)
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            idle_high: true,
        }
    }

    /// Line that idles low
    pub fn new_idle_low(pin: P) -> Self {
        Self {
            pin,
            idle_high: false,
        }
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: HalInputPin> lumen_hal::InputPin for ContactLine<P> {
    fn is_high(&mut self) -> bool {
        self.pin.is_high().unwrap_or(self.idle_high)
    }
}
