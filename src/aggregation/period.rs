//! Period keys and calendar membership.
//!
//! This module provides the [`Month`] key used for salary bucketing and
//! the [`Period`] enum used to group tasks by day, ISO week, or month.
//! Periods of a given granularity are built from disjoint date ranges, so
//! no task can land in more than one bucket.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month key in `YYYY-MM` form.
///
/// Parsing validates the format strictly: four-digit year, two-digit
/// month between 01 and 12. Anything else is an [`EngineError::InvalidPeriod`].
///
/// # Examples
///
/// ```
/// use worklog_engine::aggregation::Month;
///
/// let month: Month = "2023-03".parse().unwrap();
/// assert_eq!(month.to_string(), "2023-03");
/// assert!("2023-13".parse::<Month>().is_err());
/// assert!("202303".parse::<Month>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month key, validating the month number.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                period: format!("{:04}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    /// The calendar year of this month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the month immediately following this one.
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns true if the given date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Builds a date inside this month, if the day exists.
    pub fn with_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl FromStr for Month {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPeriod {
            period: s.to_string(),
        };

        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for Month {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

/// A calendar bucket used to group task records.
///
/// Buckets of one granularity never overlap: a task's `start_date`
/// belongs to exactly one day, one ISO week, and one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// A single calendar date.
    Day(NaiveDate),
    /// An ISO 8601 week of a given ISO year.
    Week {
        /// The ISO week-numbering year.
        year: i32,
        /// The ISO week number, 1 through 53.
        week: u32,
    },
    /// A calendar month.
    Month(Month),
}

impl Period {
    /// Builds the week period containing the given date.
    pub fn week_of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Period::Week {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Returns true if the given date falls inside this period.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog_engine::aggregation::{Month, Period};
    /// use chrono::NaiveDate;
    ///
    /// let march: Month = "2023-03".parse().unwrap();
    /// let period = Period::Month(march);
    /// assert!(period.contains(NaiveDate::from_ymd_opt(2023, 3, 10).unwrap()));
    /// assert!(!period.contains(NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Period::Day(day) => date == *day,
            Period::Week { year, week } => {
                let iso = date.iso_week();
                iso.year() == *year && iso.week() == *week
            }
            Period::Month(month) => month.contains(date),
        }
    }
}

/// Validates a `YYYY` year string.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] when the string is not exactly
/// four ASCII digits.
pub fn parse_year(year: &str) -> EngineResult<i32> {
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::InvalidPeriod {
            period: year.to_string(),
        });
    }
    year.parse().map_err(|_| EngineError::InvalidPeriod {
        period: year.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_parses_valid_key() {
        let month: Month = "2023-03".parse().unwrap();
        assert_eq!(month.year(), 2023);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2023-03");
    }

    #[test]
    fn test_month_rejects_out_of_range_month() {
        assert!("2023-00".parse::<Month>().is_err());
        assert!("2023-13".parse::<Month>().is_err());
    }

    #[test]
    fn test_month_rejects_malformed_strings() {
        for bad in ["202303", "2023-3", "23-03", "2023/03", "march", ""] {
            let result = bad.parse::<Month>();
            match result {
                Err(EngineError::InvalidPeriod { period }) => assert_eq!(period, bad),
                other => panic!("Expected InvalidPeriod for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_month_succ_rolls_over_year() {
        let december: Month = "2023-12".parse().unwrap();
        assert_eq!(december.succ().to_string(), "2024-01");

        let january: Month = "2023-01".parse().unwrap();
        assert_eq!(january.succ().to_string(), "2023-02");
    }

    #[test]
    fn test_month_contains_matches_calendar_month() {
        let march: Month = "2023-03".parse().unwrap();
        assert!(march.contains(make_date("2023-03-01")));
        assert!(march.contains(make_date("2023-03-31")));
        assert!(!march.contains(make_date("2023-02-28")));
        assert!(!march.contains(make_date("2024-03-01")));
    }

    #[test]
    fn test_month_serde_round_trip() {
        let month: Month = "2023-07".parse().unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2023-07\"");

        let back: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
    }

    #[test]
    fn test_month_deserialization_rejects_invalid() {
        let result: Result<Month, _> = serde_json::from_str("\"2023-13\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_period_exact_match() {
        let period = Period::Day(make_date("2023-03-15"));
        assert!(period.contains(make_date("2023-03-15")));
        assert!(!period.contains(make_date("2023-03-16")));
    }

    #[test]
    fn test_week_period_iso_membership() {
        // 2023-03-13 is a Monday; 2023-03-19 the following Sunday
        let period = Period::week_of(make_date("2023-03-15"));
        assert!(period.contains(make_date("2023-03-13")));
        assert!(period.contains(make_date("2023-03-19")));
        assert!(!period.contains(make_date("2023-03-20")));
        assert!(!period.contains(make_date("2023-03-12")));
    }

    #[test]
    fn test_week_period_across_year_boundary() {
        // 2023-01-01 is a Sunday belonging to ISO week 52 of 2022
        let period = Period::week_of(make_date("2023-01-01"));
        assert!(period.contains(make_date("2022-12-26")));
        assert!(!period.contains(make_date("2023-01-02")));
    }

    #[test]
    fn test_month_buckets_are_disjoint() {
        let feb: Month = "2023-02".parse().unwrap();
        let mar: Month = "2023-03".parse().unwrap();
        let date = make_date("2023-03-01");

        assert!(Period::Month(mar).contains(date));
        assert!(!Period::Month(feb).contains(date));
    }

    #[test]
    fn test_parse_year_accepts_four_digits() {
        assert_eq!(parse_year("2023").unwrap(), 2023);
    }

    #[test]
    fn test_parse_year_rejects_other_shapes() {
        for bad in ["23", "20233", "20a3", "-203", ""] {
            assert!(parse_year(bad).is_err(), "expected {:?} to be rejected", bad);
        }
    }
}
