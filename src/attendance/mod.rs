//! Attendance state derivation.
//!
//! This module turns raw clock events into per-day attendance records via
//! a small state machine, and aggregates day records into week windows
//! and summary counts.

mod clock;
mod week;

pub use clock::{clock_in, clock_out, derive_day};
pub use week::{AttendanceSummary, business_days_through, summarize};
