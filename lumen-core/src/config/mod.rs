//! Configuration types
//!
//! Board constants for the panel, touch digitizer, backlight and tick loop.
//! Nothing here is persisted; every restart begins from these defaults.

pub mod types;

pub use types::*;
