//! Touch sampling channel
//!
//! Turns raw digitizer conversions into calibrated, debounced single-point
//! pointer input: one [`CalibratedPoint`] per runtime tick.

pub mod calibration;
pub mod channel;

pub use calibration::{map_axis, map_sample};
pub use channel::{CalibratedPoint, TouchChannel, TouchSample};
