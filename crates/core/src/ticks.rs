// SPDX-License-Identifier: MIT

//!
//! Tick configuration
//!

use crate::{TimelineError, Year};
use log::debug;
use serde::{Deserialize, Serialize};

/// The major tick spec used when none has been set (every 5 years)
pub const DEFAULT_MAJOR_TICKS: TickSpec = TickSpec {
    count: TickCount(5),
    unit: TickUnit::Year,
};

/// The minor tick spec used when none has been set (every year)
pub const DEFAULT_MINOR_TICKS: TickSpec = TickSpec {
    count: TickCount(1),
    unit: TickUnit::Year,
};

/// The unit ticks are counted in.  Only whole years are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickUnit {
    #[serde(rename = "year", alias = "years")]
    Year,
}

/// A positive number of [`TickUnit`]s
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct TickCount(u32);

impl TickCount {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for TickCount {
    type Error = TimelineError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(count) if count > 0 => Ok(TickCount(count)),
            _ => Err(TimelineError::InvalidTickCount(value)),
        }
    }
}

/// How often ticks of one kind (major or minor) occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TickSpec {
    count: TickCount,
    unit: TickUnit,
}

impl TickSpec {
    /// Create a tick spec if the count is positive
    pub fn new(count: i64, unit: TickUnit) -> Result<Self, TimelineError> {
        Ok(Self {
            count: TickCount::try_from(count)?,
            unit,
        })
    }

    pub fn count(&self) -> TickCount {
        self.count
    }

    pub fn unit(&self) -> TickUnit {
        self.unit
    }

    /// Whether a tick of this kind falls on the given year (i.e. the year is
    /// divisible by the count)
    pub fn falls_on(&self, year: Year) -> bool {
        match self.unit {
            TickUnit::Year => i64::from(year.value()).rem_euclid(i64::from(self.count.0)) == 0,
        }
    }
}

/// The major & minor tick specs of a timeline, either of which may not have
/// been set yet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickConfig {
    pub major: Option<TickSpec>,
    pub minor: Option<TickSpec>,
}

/// Tick specs once defaults have been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTicks {
    pub major: TickSpec,

    /// Stored but not yet used when drawing (every year gets a tick line)
    pub minor: TickSpec,
}

impl TickConfig {
    /// Fill in the defaults for whichever of major & minor was never set.
    /// Explicitly set values are left alone.
    pub fn resolve_defaults(&mut self) {
        if self.major.is_none() {
            debug!("no major ticks set, using {DEFAULT_MAJOR_TICKS:?}");
            self.major = Some(DEFAULT_MAJOR_TICKS);
        }
        if self.minor.is_none() {
            debug!("no minor ticks set, using {DEFAULT_MINOR_TICKS:?}");
            self.minor = Some(DEFAULT_MINOR_TICKS);
        }
    }

    /// The tick specs with defaults filled in (without altering `self`)
    pub fn resolved(&self) -> ResolvedTicks {
        ResolvedTicks {
            major: self.major.unwrap_or(DEFAULT_MAJOR_TICKS),
            minor: self.minor.unwrap_or(DEFAULT_MINOR_TICKS),
        }
    }
}
