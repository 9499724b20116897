//! Embassy time driver as a monotonic clock

use embassy_time::Instant;
use lumen_hal::MonotonicClock;

/// Clock backed by the board's embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }

    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
