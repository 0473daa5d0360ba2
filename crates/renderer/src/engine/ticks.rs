// SPDX-License-Identifier: MIT

//!
//! Year ticks along the axis
//!

use crate::{Projection, snap_to_half_pixel};
use serde::Serialize;
use timeframe_core::{Date, ResolvedTicks, TimelineError, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickKind {
    /// Labelled with the year
    Major,
    Minor,
}

/// A tick on the axis at the start of a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tick {
    pub year: Year,

    /// Snapped to the middle of a pixel
    pub x: f64,

    pub kind: TickKind,
}

impl Tick {
    pub fn is_major(&self) -> bool {
        self.kind == TickKind::Major
    }
}

/// One tick for every year the projection's range touches, in ascending year
/// order.  The first tick can fall before the start of the axis when the range
/// doesn't start on the 1st of January.
pub fn generate_ticks(
    projection: &Projection,
    ticks: &ResolvedTicks,
) -> Result<Vec<Tick>, TimelineError> {
    projection
        .range()
        .years()
        .map(|year| {
            let year = Year::try_from(i64::from(year))?;
            let x = snap_to_half_pixel(projection.x(Date::first_day_of(year)?));
            let kind = match ticks.major.falls_on(year) {
                true => TickKind::Major,
                false => TickKind::Minor,
            };
            Ok(Tick { year, x, kind })
        })
        .collect()
}
