#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use suntrack::HorizonPosition;

/// Round `value` half away from zero to `decimals` digits after the point.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Assert that `actual`, once rounded to `decimals` digits, is the literal `expected`.
pub fn assert_rounds_to(actual: f64, expected: f64, decimals: i32) {
    assert_abs_diff_eq!(round_to(actual, decimals), expected, epsilon = 1e-12);
}

/// Altitude and azimuth both match to three decimals.
pub fn assert_horizon_close(actual: &HorizonPosition, altitude: f64, azimuth: f64) {
    assert_rounds_to(actual.altitude, altitude, 3);
    assert_rounds_to(actual.azimuth, azimuth, 3);
}
