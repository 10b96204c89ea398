//! Core data models for the aggregation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod salary;
mod task;
mod user;

pub use attendance::{
    AttendanceDayRecord, AttendanceStatus, ClockEvent, ClockEventKind, ClockLocation,
};
pub use salary::{SalaryRecord, YearlySalarySummary};
pub use task::{Task, TaskType};
pub use user::User;
