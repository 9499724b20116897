//! Display flush path for Lumen
//!
//! This crate provides:
//! - `Area` / `DirtyRegion` - damaged rectangles as the graphics middleware
//!   reports them (inclusive bounds)
//! - `FlushAdapter` - translates a dirty region into panel bitmap transfers
//! - `FlushReady` - the completion signal handed back to the middleware
//!
//! # Architecture
//!
//! The middleware composes a damaged rectangle into one of its draw buffers
//! and calls [`FlushAdapter::flush`]. The adapter converts the inclusive
//! rectangle into the panel's exclusive-end window, issues the transfer
//! through [`lumen_hal::BitmapPanel`] and signals completion exactly once so
//! the middleware can reuse the buffer.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod flush;
pub mod region;

// Re-export key types
pub use flush::{FlushAdapter, FlushReady, FlushSkip, FlushStatus};
pub use region::{Area, DirtyRegion};
