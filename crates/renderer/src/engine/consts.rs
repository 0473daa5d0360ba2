// SPDX-License-Identifier: MIT

//!
//! Constants
//!

/// The width used when the host doesn't give one
pub const DEFAULT_OUTER_WIDTH: f64 = 800.0;

/// Timelines are a fixed height
pub const DEFAULT_OUTER_HEIGHT: f64 = 100.0;

/// Padding used on all 4 sides
pub const DEFAULT_PADDING: f64 = 20.0;
