//! Dirty region types
//!
//! Coordinates follow the graphics middleware: signed, with both corners
//! inclusive. `(0, 0, 9, 9)` is a 10×10 square.

use lumen_hal::Rgb565;

/// Inclusive rectangle in panel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Area {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Area {
    /// Create an area from its inclusive corners
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Area covering a whole `width × height` panel
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: width as i32 - 1,
            y2: height as i32 - 1,
        }
    }

    /// True when the corners are inverted on either axis
    pub const fn is_empty(&self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }

    /// Width in pixels (0 for an empty area)
    pub fn width(&self) -> u64 {
        if self.x2 < self.x1 {
            0
        } else {
            (self.x2 as i64 - self.x1 as i64 + 1) as u64
        }
    }

    /// Height in pixels (0 for an empty area)
    pub fn height(&self) -> u64 {
        if self.y2 < self.y1 {
            0
        } else {
            (self.y2 as i64 - self.y1 as i64 + 1) as u64
        }
    }

    /// Number of pixels covered, `None` if it does not fit in `usize`
    pub fn pixel_count(&self) -> Option<usize> {
        let count = self.width().checked_mul(self.height())?;
        usize::try_from(count).ok()
    }

    /// Overlap of two areas, `None` if they do not intersect
    pub fn intersect(&self, other: &Area) -> Option<Area> {
        let clipped = Area {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        };
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }
}

/// A damaged rectangle and the draw buffer holding its new pixels
///
/// The buffer is borrowed from the middleware for the duration of one
/// flush; it holds `area.width() * area.height()` pixels in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct DirtyRegion<'a> {
    pub area: Area,
    pub pixels: &'a [Rgb565],
}

impl<'a> DirtyRegion<'a> {
    pub const fn new(area: Area, pixels: &'a [Rgb565]) -> Self {
        Self { area, pixels }
    }
}
