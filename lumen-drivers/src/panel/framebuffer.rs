//! In-memory RGB565 framebuffer
//!
//! For RGB-interface panels whose controller scans out of a frame buffer
//! in RAM (PSRAM on the ESP32-S3). A bitmap transfer becomes one row copy
//! per line of the window.

use lumen_hal::{BitmapPanel, Rgb565};

/// Rejected framebuffer transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramebufferError {
    /// Window empty or outside the panel
    BadWindow,
    /// Pixel slice shorter than the window
    ShortBuffer,
    /// Backing storage smaller than `width * height`
    BadStorage,
}

/// Panel backed by a row-major `width × height` pixel buffer
pub struct FramebufferPanel<'a> {
    pixels: &'a mut [Rgb565],
    width: u16,
    height: u16,
}

impl<'a> FramebufferPanel<'a> {
    /// Wrap `pixels` as a `width × height` panel
    pub fn new(
        pixels: &'a mut [Rgb565],
        width: u16,
        height: u16,
    ) -> Result<Self, FramebufferError> {
        if pixels.len() < width as usize * height as usize {
            return Err(FramebufferError::BadStorage);
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Read back a single pixel
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Whole frame, row-major
    pub fn frame(&self) -> &[Rgb565] {
        &self.pixels[..self.width as usize * self.height as usize]
    }
}

impl BitmapPanel for FramebufferPanel<'_> {
    type Error = FramebufferError;

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error> {
        if x_start >= x_end || y_start >= y_end || x_end > self.width || y_end > self.height {
            return Err(FramebufferError::BadWindow);
        }

        let span = (x_end - x_start) as usize;
        let rows = (y_end - y_start) as usize;
        if pixels.len() < span * rows {
            return Err(FramebufferError::ShortBuffer);
        }

        let stride = self.width as usize;
        for (row, src) in pixels.chunks_exact(span).take(rows).enumerate() {
            let start = (y_start as usize + row) * stride + x_start as usize;
            self.pixels[start..start + span].copy_from_slice(src);
        }
        Ok(())
    }

    fn resolution(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
