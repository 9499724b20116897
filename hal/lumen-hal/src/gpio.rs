//! GPIO pin abstractions
//!
//! Only digital inputs are needed by the runtime: the digitizer's contact
//! (pen-interrupt) line is polled once per tick.

/// Digital input pin
///
/// Reading takes `&mut self` because most chip HALs (and `embedded-hal`
/// 1.0) need mutable access to sample a pin.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}
