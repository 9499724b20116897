//! Hardware abstraction traits
//!
//! These traits define the interface between the runtime logic and the
//! peripheral drivers in `lumen-drivers`.

pub mod backlight;
pub mod touch;

pub use backlight::BacklightActuator;
pub use touch::{Axis, TouchDigitizer};
