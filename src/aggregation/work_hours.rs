//! Work-hour bucketing.
//!
//! This module splits a user's task hours for a period into regular and
//! overtime components. Only completed tasks contribute hours; a task is
//! overtime iff its type is tagged overtime, so every completed task falls
//! in exactly one of the two buckets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Task;

use super::period::Period;

/// Regular and overtime hours for one user and one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkHourTotals {
    /// Completed-task hours not tagged overtime.
    pub regular_hours: Decimal,
    /// Completed-task hours tagged overtime.
    pub overtime_hours: Decimal,
}

impl WorkHourTotals {
    /// The sum of regular and overtime hours.
    pub fn total(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// Buckets a user's task hours for a period into regular and overtime.
///
/// A task belongs to the bucket when its `user_id` matches and its
/// `start_date` falls inside the period. Contribution follows the logged
/// hours rule: completed tasks contribute `actual_hours`, incomplete
/// tasks contribute nothing. Urgent tasks count as regular work.
///
/// An empty task list (or one with no matching tasks) yields all-zero
/// totals, never an error.
///
/// # Arguments
///
/// * `user_id` - The user whose hours to aggregate
/// * `tasks` - The closed snapshot of tasks to bucket
/// * `period` - The calendar bucket to restrict to
///
/// # Examples
///
/// ```
/// use worklog_engine::aggregation::{aggregate_work_hours, Period};
/// use worklog_engine::models::{Task, TaskType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let tasks = vec![Task {
///     id: "task_001".to_string(),
///     user_id: "u1".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
///     completed: true,
///     actual_hours: Decimal::new(8, 0),
///     task_type: TaskType::Regular,
/// }];
///
/// let period = Period::Month("2023-03".parse().unwrap());
/// let totals = aggregate_work_hours("u1", &tasks, &period);
/// assert_eq!(totals.regular_hours, Decimal::new(8, 0));
/// assert_eq!(totals.overtime_hours, Decimal::ZERO);
/// ```
pub fn aggregate_work_hours(user_id: &str, tasks: &[Task], period: &Period) -> WorkHourTotals {
    let in_period = tasks
        .iter()
        .filter(|task| task.user_id == user_id && period.contains(task.start_date));

    let mut total_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;

    for task in in_period {
        let hours = task.logged_hours();
        total_hours += hours;
        if task.is_overtime() {
            overtime_hours += hours;
        }
    }

    WorkHourTotals {
        regular_hours: total_hours - overtime_hours,
        overtime_hours,
    }
}
