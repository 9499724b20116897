//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the board-facing traits the panel runtime is written
//! against. Chip-specific code (ESP32-S3 LCD/LEDC peripherals, embassy
//! timers, `embedded-hal` pins) implements them, so the same runtime can be
//! exercised on the host with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Board firmware (outer tick loop)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-core / lumen-display (runtime)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-drivers / chip HAL adapters      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input (touch contact line)
//! - [`timer::MonotonicClock`] - Free-running microsecond time source
//! - [`panel::BitmapPanel`] - Panel bitmap transfer primitive

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod panel;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::InputPin;
pub use panel::{BitmapPanel, Rgb565};
pub use timer::MonotonicClock;
