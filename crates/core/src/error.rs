// SPDX-License-Identifier: MIT

//!
//! Timeline errors
//!

use crate::{CategoryHandle, Date, DateError};
use thiserror::Error;

/// Errors that can arise when building or laying out a
/// [`Timeline`](crate::Timeline)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// Date text that couldn't be parsed, or that isn't a real date
    #[error("Invalid date: {0}")]
    InvalidDateFormat(#[from] DateError),

    /// The range isn't complete, or is back to front
    #[error("Invalid range: {0}")]
    InvalidRange(RangeProblem),

    /// The range starts and ends on the same day so nothing can be placed on
    /// it
    #[error("The range starts and ends on {0}")]
    DegenerateRange(Date),

    #[error("Category `{0}` does not exist")]
    UnknownCategory(CategoryHandle),

    #[error("Span `{name}` ends ({end}) before it starts ({start})")]
    InvalidSpan { name: String, start: Date, end: Date },

    #[error("Tick count `{0}` is not allowed (must be positive)")]
    InvalidTickCount(i64),
}

/// Why a range is invalid
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeProblem {
    #[error("the start date has not been set")]
    StartUnset,

    #[error("the end date has not been set")]
    EndUnset,

    #[error("the start ({start}) is after the end ({end})")]
    Reversed { start: Date, end: Date },
}
