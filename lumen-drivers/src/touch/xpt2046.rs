//! XPT2046 resistive touch controller (SPI)
//!
//! # Transaction
//!
//! Every conversion is one 3-byte full-duplex transfer with chip select
//! held low for the whole frame:
//!
//! ```text
//! MOSI: [cmd]  [0x00]      [0x00]
//! MISO: [--]   [D11..D4]   [D3..D0 0000]
//! ```
//!
//! The 12-bit result is `((rx[1] << 8) | rx[2]) >> 3`. Commands select
//! differential mode, 12-bit conversion and power-down between
//! conversions, which also keeps PENIRQ enabled.
//!
//! # Bus setup
//!
//! SPI mode 0 at up to [`MAX_SPI_HZ`]. The `SpiDevice` owns chip select.

use embedded_hal::spi::{Mode, SpiDevice, MODE_0};
use lumen_core::traits::{Axis, TouchDigitizer};

/// Control bytes (start bit, channel, 12-bit, differential, power-down)
pub mod cmd {
    /// Measure X position
    pub const READ_X: u8 = 0xD0;
    /// Measure Y position
    pub const READ_Y: u8 = 0x90;
}

/// Highest SCLK the controller is run at
pub const MAX_SPI_HZ: u32 = 1_000_000;

/// SPI mode the controller expects
pub const SPI_MODE: Mode = MODE_0;

/// Bytes per conversion frame
const FRAME_LEN: usize = 3;

/// Extract the 12-bit conversion from a received frame
pub fn decode_frame(rx: &[u8; FRAME_LEN]) -> u16 {
    ((((rx[1] as u16) << 8) | rx[2] as u16) >> 3) & 0x0FFF
}

/// XPT2046 digitizer on an `embedded-hal` SPI device
pub struct Xpt2046<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> Xpt2046<SPI> {
    /// Create a new driver
    ///
    /// `spi` must be configured for [`SPI_MODE`] at no more than
    /// [`MAX_SPI_HZ`].
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Release the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Run one conversion with a raw control byte
    pub fn convert(&mut self, command: u8) -> Result<u16, SPI::Error> {
        let tx = [command, 0x00, 0x00];
        let mut rx = [0u8; FRAME_LEN];
        self.spi.transfer(&mut rx, &tx)?;
        Ok(decode_frame(&rx))
    }
}

impl<SPI: SpiDevice> TouchDigitizer for Xpt2046<SPI> {
    type Error = SPI::Error;

    fn read_axis(&mut self, axis: Axis) -> Result<u16, Self::Error> {
        let command = match axis {
            Axis::X => cmd::READ_X,
            Axis::Y => cmd::READ_Y,
        };
        self.convert(command)
    }
}
