// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Move an x value onto the middle of the pixel it falls in, so that 1px wide
/// vertical lines are drawn crisply rather than smeared across 2 pixels
pub(crate) fn snap_to_half_pixel(value: f64) -> f64 {
    value.floor() + 0.5
}

/// Half way between two values
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}
