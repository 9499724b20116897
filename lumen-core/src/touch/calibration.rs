//! Linear raw-to-screen calibration
//!
//! `out = (raw - in_min) * (out_max - out_min) / (in_max - in_min) + out_min`
//! with `out_min = 0` and `out_max` equal to the panel resolution, followed
//! by a clamp to `[0, resolution - 1]`.

use crate::config::{AxisCalibration, PanelConfig, TouchCalibration};

use super::channel::TouchSample;

/// Map one averaged raw reading onto a screen axis of `resolution` pixels
///
/// Integer division truncates toward zero. A degenerate calibration
/// (`raw_min == raw_max`) yields 0 instead of dividing by zero.
pub fn map_axis(raw: u16, calibration: AxisCalibration, resolution: u16) -> u16 {
    if resolution == 0 {
        return 0;
    }

    let in_min = calibration.raw_min as i32;
    let in_max = calibration.raw_max as i32;
    let out_max = resolution as i32;

    let span = in_max - in_min;
    let mapped = if span == 0 {
        0
    } else {
        (raw as i32 - in_min) * out_max / span
    };

    mapped.clamp(0, out_max - 1) as u16
}

/// Map a raw sample to screen coordinates `(x, y)`
pub fn map_sample(
    sample: TouchSample,
    calibration: &TouchCalibration,
    panel: &PanelConfig,
) -> (u16, u16) {
    (
        map_axis(sample.x, calibration.x, panel.width),
        map_axis(sample.y, calibration.y, panel.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOUCH_RAW_MAX;
    use proptest::prelude::*;

    const X: AxisCalibration = AxisCalibration::new(200, 3900);
    const Y: AxisCalibration = AxisCalibration::new(240, 3800);

    #[test]
    fn test_anchor_points_hit_resolution_bounds() {
        assert_eq!(map_axis(200, X, 480), 0);
        assert_eq!(map_axis(3900, X, 480), 479);
        assert_eq!(map_axis(240, Y, 272), 0);
        assert_eq!(map_axis(3800, Y, 272), 271);
    }

    #[test]
    fn test_midpoint() {
        // (2050 - 200) * 480 / 3700 = 240
        assert_eq!(map_axis(2050, X, 480), 240);
        // (2020 - 240) * 272 / 3560 = 136
        assert_eq!(map_axis(2020, Y, 272), 136);
    }

    #[test]
    fn test_below_anchor_clamps_to_zero() {
        assert_eq!(map_axis(0, X, 480), 0);
        assert_eq!(map_axis(199, X, 480), 0);
    }

    #[test]
    fn test_above_anchor_clamps_to_last_pixel() {
        assert_eq!(map_axis(TOUCH_RAW_MAX, X, 480), 479);
        assert_eq!(map_axis(TOUCH_RAW_MAX, Y, 272), 271);
    }

    #[test]
    fn test_inverted_axis() {
        // Swapped anchors mirror the axis
        let inverted = AxisCalibration::new(3900, 200);
        assert_eq!(map_axis(3900, inverted, 480), 0);
        assert_eq!(map_axis(200, inverted, 480), 479);
    }

    #[test]
    fn test_degenerate_calibration() {
        let flat = AxisCalibration::new(1000, 1000);
        assert_eq!(map_axis(1000, flat, 480), 0);
        assert_eq!(map_axis(4000, flat, 480), 0);
    }

    #[test]
    fn test_map_sample() {
        let sample = TouchSample { x: 3900, y: 240 };
        let calibration = TouchCalibration::default();
        let (x, y) = map_sample(sample, &calibration, &PanelConfig::default());
        assert_eq!((x, y), (479, 0));
    }

    proptest! {
        #[test]
        fn prop_output_always_on_panel(
            raw in 0u16..=u16::MAX,
            raw_min in 0u16..4096,
            raw_max in 0u16..4096,
            resolution in 1u16..2048,
        ) {
            let out = map_axis(raw, AxisCalibration::new(raw_min, raw_max), resolution);
            prop_assert!(out < resolution);
        }

        #[test]
        fn prop_monotonic_between_anchors(a in 200u16..=3900, b in 200u16..=3900) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(map_axis(lo, X, 480) <= map_axis(hi, X, 480));
        }
    }
}
