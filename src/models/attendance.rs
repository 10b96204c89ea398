//! Attendance models.
//!
//! This module defines the per-day attendance record, its status, and the
//! clock events that drive it.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The status of a single attendance day.
///
/// Status is a pure function of the two clock timestamps and calendar
/// time: no clock-in yet is `pending`, a clock-in without a clock-out is
/// `in_progress`, both timestamps is `completed`, and a past day that
/// ended still pending is retroactively `absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// No clock-in recorded yet today.
    Pending,
    /// Clock-in recorded, no clock-out yet.
    InProgress,
    /// Both clock-in and clock-out recorded.
    Completed,
    /// A past day that ended with no clock-in.
    Absent,
}

/// The location attached to a clock event by the caller.
///
/// Whether the location is inside the permitted clock-in radius is a
/// precondition computed by the caller; the engine only tags the event
/// with the result and never computes geodesics itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockLocation {
    /// Human-readable address of the clock event.
    pub address: String,
    /// Whether the event happened inside the permitted radius.
    pub in_range: bool,
}

/// The kind of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventKind {
    /// Start-of-work punch.
    ClockIn,
    /// End-of-work punch.
    ClockOut,
}

/// A single raw clock event as recorded by the attendance surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Whether this is a clock-in or a clock-out.
    pub kind: ClockEventKind,
    /// When the event happened.
    pub time: DateTime<Utc>,
    /// Where the event happened, as supplied by the caller.
    pub location: ClockLocation,
}

/// One attendance record per user per calendar date.
///
/// Exactly one record exists per `(user_id, date)` pair; it holds at most
/// one clock-in and one clock-out timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDayRecord {
    /// Unique identifier, formatted `{user_id}-{YYYYMMDD}`.
    pub id: String,
    /// The user the record belongs to.
    pub user_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// When the user clocked in, if they have.
    pub clock_in_time: Option<DateTime<Utc>>,
    /// When the user clocked out, if they have.
    pub clock_out_time: Option<DateTime<Utc>>,
    /// The location of the most recent clock event.
    pub location: Option<ClockLocation>,
    /// The derived status of the day.
    pub status: AttendanceStatus,
}

impl AttendanceDayRecord {
    /// Creates the initial pending record for a user and date.
    pub fn open(user_id: &str, date: NaiveDate) -> Self {
        Self {
            id: format!("{}-{}", user_id, date.format("%Y%m%d")),
            user_id: user_id.to_string(),
            date,
            clock_in_time: None,
            clock_out_time: None,
            location: None,
            status: AttendanceStatus::Pending,
        }
    }

    /// Returns the worked duration for this record, floored to whole seconds.
    ///
    /// For an in-progress record the duration runs from clock-in to `now`;
    /// for a completed record it runs from clock-in to clock-out. Records
    /// with no clock-in report `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog_engine::models::AttendanceDayRecord;
    /// use chrono::{NaiveDate, TimeZone, Utc};
    ///
    /// let record = AttendanceDayRecord::open("u1", NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    /// let now = Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap();
    /// assert!(record.worked_duration(now).is_none());
    /// ```
    pub fn worked_duration(&self, now: DateTime<Utc>) -> Option<Duration> {
        let start = self.clock_in_time?;
        let end = self.clock_out_time.unwrap_or(now);
        Some(Duration::seconds((end - start).num_seconds()))
    }
}
