//! Panel bitmap transfer
//!
//! Mirrors the transfer primitive exposed by RGB panel controllers: a
//! rectangle given as start coordinates plus an *exclusive* end, and a
//! row-major pixel buffer covering exactly that rectangle.

/// Raw RGB565 pixel as the panel consumes it
pub type Rgb565 = u16;

/// Panel that accepts rectangular bitmap transfers
pub trait BitmapPanel {
    /// Error type for transfer operations
    type Error;

    /// Transfer `pixels` into the window `[x_start, x_end) × [y_start, y_end)`
    ///
    /// `pixels` holds `(x_end - x_start) * (y_end - y_start)` values in
    /// row-major order. The transfer may complete asynchronously in
    /// hardware; the caller may reuse `pixels` once this returns.
    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        pixels: &[Rgb565],
    ) -> Result<(), Self::Error>;

    /// Panel resolution as (width, height) in pixels
    fn resolution(&self) -> (u16, u16);
}
