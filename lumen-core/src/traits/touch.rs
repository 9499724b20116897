//! Touch digitizer trait

/// Digitizer measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// Resistive touch digitizer
///
/// One call is one fixed-length synchronous bus transaction returning a
/// single raw 12-bit conversion for the requested axis.
pub trait TouchDigitizer {
    /// Error type for bus transactions
    type Error;

    /// Perform one conversion on `axis` and return the raw reading (0-4095)
    fn read_axis(&mut self, axis: Axis) -> Result<u16, Self::Error>;
}
