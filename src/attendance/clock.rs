//! Clock state transitions and day derivation.
//!
//! This module implements the attendance state machine for a single
//! `(user, date)` pair: `pending → in_progress → completed`, with a
//! terminal `absent` assigned retroactively to past days that never saw a
//! clock-in. Transitions are pure; each one returns a fresh record and
//! leaves the input untouched.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceDayRecord, AttendanceStatus, ClockEvent, ClockEventKind, ClockLocation,
};

/// Applies a clock-in to a day record.
///
/// Accepted only while the record is `pending`; the result is
/// `in_progress` with the clock-in time and location set.
///
/// # Errors
///
/// Returns [`EngineError::DuplicateClockIn`] when the day already has a
/// clock-in (or is otherwise closed).
///
/// # Examples
///
/// ```
/// use worklog_engine::attendance::clock_in;
/// use worklog_engine::models::{AttendanceDayRecord, AttendanceStatus, ClockLocation};
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let record = AttendanceDayRecord::open("u1", NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
/// let time = Utc.with_ymd_and_hms(2023, 3, 15, 9, 10, 0).unwrap();
/// let location = ClockLocation { address: "100 Main St".to_string(), in_range: true };
///
/// let record = clock_in(&record, time, location).unwrap();
/// assert_eq!(record.status, AttendanceStatus::InProgress);
/// assert_eq!(record.clock_in_time, Some(time));
/// ```
pub fn clock_in(
    record: &AttendanceDayRecord,
    time: DateTime<Utc>,
    location: ClockLocation,
) -> EngineResult<AttendanceDayRecord> {
    match record.status {
        AttendanceStatus::Pending => {
            let mut next = record.clone();
            next.clock_in_time = Some(time);
            next.location = Some(location);
            next.status = AttendanceStatus::InProgress;
            Ok(next)
        }
        _ => Err(EngineError::DuplicateClockIn {
            user_id: record.user_id.clone(),
            date: record.date,
        }),
    }
}

/// Applies a clock-out to a day record.
///
/// Accepted only while the record is `in_progress`; the result is
/// `completed` with the clock-out time and location set.
///
/// # Errors
///
/// Returns [`EngineError::MissingClockIn`] when no clock-in was recorded,
/// or [`EngineError::AlreadyClockedOut`] when the day is already
/// completed.
pub fn clock_out(
    record: &AttendanceDayRecord,
    time: DateTime<Utc>,
    location: ClockLocation,
) -> EngineResult<AttendanceDayRecord> {
    match record.status {
        AttendanceStatus::InProgress => {
            let mut next = record.clone();
            next.clock_out_time = Some(time);
            next.location = Some(location);
            next.status = AttendanceStatus::Completed;
            Ok(next)
        }
        AttendanceStatus::Completed => Err(EngineError::AlreadyClockedOut {
            user_id: record.user_id.clone(),
            date: record.date,
        }),
        AttendanceStatus::Pending | AttendanceStatus::Absent => Err(EngineError::MissingClockIn {
            user_id: record.user_id.clone(),
            date: record.date,
        }),
    }
}

/// Derives the day record for a user and date from its clock events.
///
/// Events are folded through the state machine in order; a past date that
/// ends the fold still `pending` is marked `absent`. An empty event list
/// therefore yields `pending` for the current day and `absent` for any
/// earlier day. Future dates never get records fabricated for them by the
/// week view, but deriving one directly simply reports `pending`.
///
/// # Arguments
///
/// * `user_id` - The user the record belongs to
/// * `date` - The calendar date to derive
/// * `events` - The day's clock events in the order they were recorded
/// * `today` - The current calendar date, used for the retroactive absent rule
///
/// # Errors
///
/// Propagates the state machine's rejections when the event sequence is
/// inconsistent (duplicate clock-in, clock-out before clock-in, clock-out
/// after completion).
pub fn derive_day(
    user_id: &str,
    date: NaiveDate,
    events: &[ClockEvent],
    today: NaiveDate,
) -> EngineResult<AttendanceDayRecord> {
    let mut record = AttendanceDayRecord::open(user_id, date);

    for event in events {
        record = match event.kind {
            ClockEventKind::ClockIn => clock_in(&record, event.time, event.location.clone())?,
            ClockEventKind::ClockOut => clock_out(&record, event.time, event.location.clone())?,
        };
    }

    if date < today && record.status == AttendanceStatus::Pending {
        record.status = AttendanceStatus::Absent;
    }

    Ok(record)
}
