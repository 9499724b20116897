//! Peripheral driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! lumen-core and lumen-hal on top of `embedded-hal` 1.0:
//!
//! - Touch digitizer (XPT2046 over SPI)
//! - Backlight (any `SetDutyCycle` PWM channel)
//! - Contact line (any `embedded-hal` input pin)
//! - Panel (in-memory RGB565 framebuffer)
//! - Clock (embassy time driver, behind the `embassy` feature)

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
#[cfg(feature = "embassy")]
pub mod clock;
pub mod gpio;
pub mod panel;
pub mod touch;
