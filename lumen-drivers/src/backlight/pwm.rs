//! PWM backlight
//!
//! Wraps any `embedded-hal` PWM channel. The duty range is whatever the
//! channel reports (1023 for a 10-bit LEDC timer at 5 kHz).

use embedded_hal::pwm::SetDutyCycle;
use lumen_core::traits::BacklightActuator;

/// Backlight driven by a single PWM channel
pub struct PwmBacklight<P> {
    channel: P,
    /// Inverted drive (duty 0 = full brightness)
    inverted: bool,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Create a backlight on an active-high channel
    pub fn new(channel: P) -> Self {
        Self {
            channel,
            inverted: false,
        }
    }

    /// Create a backlight on an active-low channel
    pub fn new_inverted(channel: P) -> Self {
        Self {
            channel,
            inverted: true,
        }
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> BacklightActuator for PwmBacklight<P> {
    type Error = P::Error;

    fn max_duty(&self) -> u16 {
        self.channel.max_duty_cycle()
    }

    fn set_duty(&mut self, duty: u16) -> Result<(), Self::Error> {
        let max = self.channel.max_duty_cycle();
        let duty = duty.min(max);
        let duty = if self.inverted { max - duty } else { duty };
        self.channel.set_duty_cycle(duty)
    }
}
