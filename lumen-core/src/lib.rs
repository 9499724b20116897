//! Board-agnostic core logic for the panel firmware
//!
//! This crate contains the real-time I/O layer that sits between the
//! graphics middleware and the panel peripherals:
//!
//! - Touch sampling (debounce, oversampled averaging, linear calibration)
//! - Backlight power state machine (auto-dim on inactivity, manual level)
//! - Tick runtime sequencing input, repaint, flush and power each cycle
//! - Hardware abstraction traits for the digitizer and backlight
//! - Configuration type definitions
//! - Uptime formatting for status labels

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod power;
pub mod runtime;
pub mod touch;
pub mod traits;
pub mod uptime;
