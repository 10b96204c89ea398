//! Week windows and attendance summaries.
//!
//! This module produces the business-day window for the current week and
//! rolls a set of day records up into summary counts.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceDayRecord, AttendanceStatus};

/// Summary counts over a set of attendance day records.
///
/// `present_days` counts every day with a recorded clock-in, whether or
/// not the day is finished; `attendance_rate` is `present / total`
/// rounded to four decimal places, zero when there are no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Number of day records in the window.
    pub total_days: u32,
    /// Days with a clock-in recorded (in progress or completed).
    pub present_days: u32,
    /// Days with both clock-in and clock-out recorded.
    pub completed_days: u32,
    /// Past days with no clock-in at all.
    pub absent_days: u32,
    /// `present_days / total_days`, zero when the window is empty.
    pub attendance_rate: Decimal,
}

/// Returns the business days of the current week, Monday through `today`.
///
/// Weekends are excluded and no future dates are produced; calling this
/// on a Saturday or Sunday returns all five weekdays of the week.
///
/// # Examples
///
/// ```
/// use worklog_engine::attendance::business_days_through;
/// use chrono::NaiveDate;
///
/// // 2023-03-15 is a Wednesday
/// let days = business_days_through(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
/// assert_eq!(days.len(), 3); // Mon, Tue, Wed
/// assert_eq!(days[0], NaiveDate::from_ymd_opt(2023, 3, 13).unwrap());
/// ```
pub fn business_days_through(today: NaiveDate) -> Vec<NaiveDate> {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);

    (0..7)
        .map(|offset| monday + Duration::days(offset))
        .filter(|date| *date <= today)
        .filter(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// Rolls a set of day records up into summary counts.
pub fn summarize(records: &[AttendanceDayRecord]) -> AttendanceSummary {
    let total_days = records.len() as u32;
    let mut present_days = 0;
    let mut completed_days = 0;
    let mut absent_days = 0;

    for record in records {
        match record.status {
            AttendanceStatus::InProgress => present_days += 1,
            AttendanceStatus::Completed => {
                present_days += 1;
                completed_days += 1;
            }
            AttendanceStatus::Absent => absent_days += 1,
            AttendanceStatus::Pending => {}
        }
    }

    let attendance_rate = if total_days == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(present_days) / Decimal::from(total_days)).round_dp(4)
    };

    AttendanceSummary {
        total_days,
        present_days,
        completed_days,
        absent_days,
        attendance_rate,
    }
}
