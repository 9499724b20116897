//! Flush adapter
//!
//! Stateless translation from middleware dirty regions to panel transfers.
//! The only thing it knows about the panel is its resolution.

use lumen_hal::BitmapPanel;

use crate::region::{Area, DirtyRegion};

/// Completion signal handed back to the graphics middleware
///
/// Called exactly once per [`FlushAdapter::flush`], after the transfer has
/// been issued, so the middleware may reuse the draw buffer.
pub trait FlushReady {
    fn flush_ready(&mut self);
}

impl<F: FnMut()> FlushReady for F {
    fn flush_ready(&mut self) {
        self()
    }
}

/// Reason a region was not forwarded to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlushSkip {
    /// Corners inverted on at least one axis
    Empty,
    /// No pixel of the region lies on the panel
    OffPanel,
    /// Pixel buffer holds fewer pixels than the region covers
    ShortBuffer,
}

/// Outcome of a single flush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlushStatus {
    /// Region was fully on-panel and sent as one transfer
    Transferred,
    /// Region overlapped the panel edge; `rows` visible rows were sent
    Clipped { rows: u16 },
    /// Nothing was sent
    Skipped(FlushSkip),
    /// The panel rejected a transfer
    Failed,
}

/// Adapter between the middleware's flush callback and a bitmap panel
pub struct FlushAdapter<P> {
    panel: P,
}

impl<P: BitmapPanel> FlushAdapter<P> {
    pub fn new(panel: P) -> Self {
        Self { panel }
    }

    /// Access the underlying panel
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Mutable access to the underlying panel
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Release the panel
    pub fn into_inner(self) -> P {
        self.panel
    }

    /// Push a dirty region to the panel and signal completion
    ///
    /// `done` fires exactly once, whether the region was sent, clipped,
    /// skipped or failed.
    pub fn flush<R>(&mut self, region: DirtyRegion<'_>, done: &mut R) -> FlushStatus
    where
        R: FlushReady + ?Sized,
    {
        let status = self.transfer(&region);

        #[cfg(feature = "defmt")]
        match status {
            FlushStatus::Skipped(reason) => {
                defmt::warn!("flush skipped: {} ({})", reason, region.area)
            }
            FlushStatus::Failed => defmt::warn!("panel transfer failed ({})", region.area),
            _ => {}
        }

        done.flush_ready();
        status
    }

    fn transfer(&mut self, region: &DirtyRegion<'_>) -> FlushStatus {
        let area = region.area;
        if area.is_empty() {
            return FlushStatus::Skipped(FlushSkip::Empty);
        }

        let (width, height) = self.panel.resolution();
        let Some(visible) = area.intersect(&Area::full(width, height)) else {
            return FlushStatus::Skipped(FlushSkip::OffPanel);
        };

        let needed = match area.pixel_count() {
            Some(n) if n <= region.pixels.len() => n,
            _ => return FlushStatus::Skipped(FlushSkip::ShortBuffer),
        };

        if visible == area {
            // Inclusive corners -> exclusive end for the panel primitive
            let result = self.panel.draw_bitmap(
                area.x1 as u16,
                area.y1 as u16,
                (area.x2 + 1) as u16,
                (area.y2 + 1) as u16,
                &region.pixels[..needed],
            );
            return match result {
                Ok(()) => FlushStatus::Transferred,
                Err(_) => FlushStatus::Failed,
            };
        }

        // Partially off-panel: the buffer stride no longer matches the
        // visible window, so send the visible span of each row on its own.
        let stride = area.width() as usize;
        let skip = (visible.x1 - area.x1) as usize;
        let span = visible.width() as usize;
        let mut rows = 0u16;

        for y in visible.y1..=visible.y2 {
            let start = (y - area.y1) as usize * stride + skip;
            let result = self.panel.draw_bitmap(
                visible.x1 as u16,
                y as u16,
                (visible.x2 + 1) as u16,
                (y + 1) as u16,
                &region.pixels[start..start + span],
            );
            if result.is_err() {
                return FlushStatus::Failed;
            }
            rows += 1;
        }

        FlushStatus::Clipped { rows }
    }
}
