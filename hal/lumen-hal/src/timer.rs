//! Monotonic time source
//!
//! The runtime samples the clock once per tick and passes the value down,
//! so nothing below it ever busy-waits on wall time.

/// Free-running monotonic clock with microsecond resolution
pub trait MonotonicClock {
    /// Microseconds since an arbitrary, fixed epoch (usually boot)
    ///
    /// Must never go backwards.
    fn now_us(&self) -> u64;

    /// Milliseconds since the same epoch
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
