//! Aggregation logic for the work-hour and salary engine.
//!
//! This module contains the period keys and membership tests, the
//! work-hour bucketing that splits task hours into regular and overtime
//! components, and the salary computation that combines bucketed hours
//! with a user's pay parameters into monthly records and yearly rollups.

mod period;
mod salary;
mod work_hours;

pub use period::{Month, Period, parse_year};
pub use salary::{compute_salary, yearly_summary};
pub use work_hours::{WorkHourTotals, aggregate_work_hours};
