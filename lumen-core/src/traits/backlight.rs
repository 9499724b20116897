//! Backlight actuator trait

/// Backlight drive output (usually a PWM channel)
///
/// The power controller is the only writer.
pub trait BacklightActuator {
    /// Error type for output updates
    type Error;

    /// Duty value corresponding to 100% brightness
    fn max_duty(&self) -> u16;

    /// Set the raw duty value (0..=`max_duty`)
    fn set_duty(&mut self, duty: u16) -> Result<(), Self::Error>;
}
