// SPDX-License-Identifier: MIT

//!
//! The Timeframe date type
//!

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The minimum year allowed by Timeframe
pub const MIN_YEAR: i64 = 0;

/// The maximum year allowed by Timeframe (dates are written `YYYY-MM-DD`)
pub const MAX_YEAR: i64 = 9999;

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The text is not three `-` separated groups of digits
    #[error("`{0}` is not of the form YYYY-MM-DD")]
    Format(String),

    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// The day does not exist in the given month (e.g. 31st April)
    #[error("Day `{day}` does not exist in {year:04}-{month:02}")]
    DayNotInMonth { year: i64, month: i64, day: i64 },
}

/// The Timeframe date type
///
/// Every field is always set, and the combination is always a real calendar
/// date.  Dates are totally ordered and can be converted to a day ordinal for
/// arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(NaiveDate);

/// The Timeframe day type (1-based)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The Timeframe month type (1-based, as written)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The Timeframe year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    /// The month as written (January is `1`)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The month as an index (January is `0`)
    pub fn index(&self) -> u8 {
        self.0 - 1
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=31).contains(&value) {
            Ok(Day(value as u8))
        } else {
            Err(DateError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

impl Date {
    /// Create a new [`Date`] if the result will be a real calendar date.  The
    /// month and day are 1-based, as written.
    pub fn from_ymd(year: i64, month: i64, day: i64) -> Result<Date, DateError> {
        let year = Year::try_from(year)?;
        let month = Month::try_from(month)?;
        let day = Day::try_from(day)?;
        Self::from_parts(year, month, day)
    }

    /// Create a new [`Date`] from already checked parts
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Date, DateError> {
        NaiveDate::from_ymd_opt(year.0, u32::from(month.0), u32::from(day.0))
            .map(Date)
            .ok_or(DateError::DayNotInMonth {
                year: i64::from(year.0),
                month: i64::from(month.0),
                day: i64::from(day.0),
            })
    }

    /// 1st January of the given year
    pub fn first_day_of(year: Year) -> Result<Date, DateError> {
        Self::from_parts(year, Month(1), Day(1))
    }

    /// Get the [`Date`]'s day
    pub fn day(&self) -> Day {
        Day(self.0.day() as u8)
    }

    /// Get the [`Date`]'s month
    pub fn month(&self) -> Month {
        Month(self.0.month() as u8)
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> Year {
        Year(self.0.year())
    }

    /// The number of days since 1st January of year 1 (common era).  Only
    /// differences between values are meaningful.
    pub fn value(&self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }
}

/// Parse a date written as `YYYY-MM-DD` (month and day 1-based).
///
/// This is the one parser used for every date Timeframe reads: range bounds,
/// event dates, span dates and deserialised dates.  Each of the three groups
/// must be a non-empty run of ASCII digits, and the result must be a real
/// calendar date (out of range values are rejected, never wrapped).
pub fn parse_date_string(date_string: &str) -> Result<Date, DateError> {
    let format_error = || DateError::Format(date_string.to_string());

    let pieces: Vec<&str> = date_string.trim().split('-').collect();
    let &[year, month, day] = pieces.as_slice() else {
        return Err(format_error());
    };

    let parse_piece = |piece: &str| -> Result<i64, DateError> {
        if piece.is_empty() || !piece.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(format_error());
        }
        piece.parse::<i64>().map_err(|_| format_error())
    };

    Date::from_ymd(parse_piece(year)?, parse_piece(month)?, parse_piece(day)?)
}

impl FromStr for Date {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_string(s)
    }
}

/// `YYYY-MM-DD` format (the same format that is parsed)
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year().value(),
            self.month().value(),
            self.day().value()
        )
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        parse_date_string(&string).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use timeframe_macros::date;

    #[test]
    fn from_ymd() {
        // Should return error
        assert_eq!(Date::from_ymd(2020, 13, 1), Err(DateError::InvalidMonth(13)));
        assert_eq!(Date::from_ymd(2020, 0, 1), Err(DateError::InvalidMonth(0)));
        assert_eq!(Date::from_ymd(2020, 1, 32), Err(DateError::InvalidDay(32)));
        assert_eq!(Date::from_ymd(10_000, 1, 1), Err(DateError::InvalidYear(10_000)));
        assert!(matches!(
            Date::from_ymd(2021, 2, 29),
            Err(DateError::DayNotInMonth { .. })
        ));
        assert!(Date::from_ymd(2020, 4, 31).is_err());

        // Should be ok
        assert!(Date::from_ymd(2020, 2, 29).is_ok());
        assert!(Date::from_ymd(0, 1, 1).is_ok());
        assert!(Date::from_ymd(9999, 12, 31).is_ok());
    }

    #[test]
    fn parse() {
        let date = parse_date_string("2020-03-15").unwrap();
        assert_eq!(date.year().value(), 2020);
        assert_eq!(date.month().value(), 3);
        assert_eq!(date.month().index(), 2);
        assert_eq!(date.day().value(), 15);
        assert_eq!(date.year().to_string(), "2020");

        // Short groups and surrounding whitespace are fine
        assert_eq!(parse_date_string(" 2020-3-5 ").unwrap(), date!("2020-03-05"));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in [
            "2020/03/15",
            "2020-03",
            "2020-03-15-01",
            "",
            "--",
            "2020-0x-15",
            "2020-03-15abc",
            "-2020-03-15",
            "+2020-03-15",
            "2020- 3-15",
            "99999999999999999999-01-01",
        ] {
            assert!(
                matches!(parse_date_string(text), Err(DateError::Format(_))),
                "`{text}` should not parse"
            );
        }
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert_eq!(parse_date_string("2020-13-01"), Err(DateError::InvalidMonth(13)));
        assert_eq!(parse_date_string("2020-00-01"), Err(DateError::InvalidMonth(0)));
        assert_eq!(parse_date_string("2020-01-00"), Err(DateError::InvalidDay(0)));
        assert!(parse_date_string("2019-02-29").is_err());
    }

    #[test]
    fn cmp() {
        let date_1 = date!("0234-01-01");
        let date_2 = date!("4321-01-01");
        assert!(date_2 > date_1);
        assert!(date_1 < date_2);
        assert!(date_1 == date_1);
        assert!(date_1 != date_2);

        // Difference of 1 day
        let date_1 = date!("0234-01-01");
        let date_2 = date!("0234-01-02");
        assert!(date_2 > date_1);
        assert_eq!(date_2.value() - date_1.value(), 1);
    }

    #[test]
    fn value_is_linear_in_days() {
        // 2020 is a leap year
        let start = date!("2020-01-01");
        let end = date!("2021-01-01");
        assert_eq!(end.value() - start.value(), 366);

        let start = date!("2021-01-01");
        let end = date!("2022-01-01");
        assert_eq!(end.value() - start.value(), 365);
    }

    #[test]
    fn first_day_of() {
        let year = Year::try_from(1969).unwrap();
        assert_eq!(Date::first_day_of(year).unwrap(), date!("1969-01-01"));
    }

    #[test]
    fn formats() {
        let date = date!("0969-07-02");
        assert_eq!(date.to_string(), "0969-07-02");
    }

    #[test]
    fn serde() {
        let date = date!("1969-07-20");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1969-07-20""#);
        assert_eq!(serde_json::from_str::<Date>(&json).unwrap(), date);
        assert!(serde_json::from_str::<Date>(r#""1969/07/20""#).is_err());
    }
}
