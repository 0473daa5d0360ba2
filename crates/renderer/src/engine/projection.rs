// SPDX-License-Identifier: MIT

//!
//! Date to x projection
//!

use timeframe_core::{Date, RangeProblem, TimeRange, TimelineError};

/// Maps dates onto x values.  The start of the range maps to the left padding
/// and the end of the range maps to the right edge of the drawable width, with
/// everything else placed linearly (by day) in between.
///
/// This is the only place x values for dates are calculated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// The range being projected
    range: TimeRange,

    /// Number of days from the start to the end of the range (never 0)
    range_days: i64,

    /// The width of the axis
    drawable_width: f64,

    /// The x value of the start of the range
    padding_x: f64,
}

impl Projection {
    /// Create a projection.  The range must run forwards and cover at least 1
    /// day.
    pub fn new(
        range: TimeRange,
        drawable_width: f64,
        padding_x: f64,
    ) -> Result<Self, TimelineError> {
        if range.start > range.end {
            return Err(TimelineError::InvalidRange(RangeProblem::Reversed {
                start: range.start,
                end: range.end,
            }));
        }
        if range.is_degenerate() {
            return Err(TimelineError::DegenerateRange(range.start));
        }
        Ok(Self {
            range,
            range_days: range.end.value() - range.start.value(),
            drawable_width,
            padding_x,
        })
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// The x value of the date.  Dates outside of the range get x values
    /// outside of the axis.
    pub fn x(&self, date: Date) -> f64 {
        let days_from_start = (date.value() - self.range.start.value()) as f64;
        (days_from_start / self.range_days as f64) * self.drawable_width + self.padding_x
    }
}
