//! Uptime formatting for status labels

use core::fmt::Write;
use heapless::String;

/// Longest output is `"213503982334d 14:25:51"` (22 bytes)
pub type UptimeString = String<24>;

/// Format a millisecond uptime as `[Dd ]HH:MM:SS`
///
/// The day prefix only appears once at least one full day has elapsed.
pub fn format_uptime(uptime_ms: u64) -> UptimeString {
    let total_secs = uptime_ms / 1000;
    let days = total_secs / 86_400;
    let hours = (total_secs / 3_600) % 24;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;

    let mut out = UptimeString::new();
    // Capacity covers u64::MAX milliseconds, so the write cannot fail
    let _ = if days > 0 {
        write!(out, "{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        write!(out, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    };
    out
}
