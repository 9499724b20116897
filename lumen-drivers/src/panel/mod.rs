//! Panel drivers

pub mod framebuffer;

pub use framebuffer::{FramebufferError, FramebufferPanel};
