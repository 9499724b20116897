//! Backlight power management
//!
//! A two-state machine (awake/dimmed) driven by the middleware's inactivity
//! duration and a configurable timeout, layered over a manual brightness
//! level that survives dimming untouched.

pub mod controller;
pub mod inactivity;
pub mod machine;
pub mod timeout;

pub use controller::{duty_for_percent, BacklightState, PowerController, PowerTransition};
pub use inactivity::InactivityClock;
pub use machine::PowerState;
pub use timeout::{SuspendTimeout, SUSPEND_TIMEOUTS};
