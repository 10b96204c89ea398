//! Salary computation.
//!
//! This module turns a user's pay parameters and bucketed work hours into
//! monthly [`SalaryRecord`]s and folds monthly records into a
//! [`YearlySalarySummary`].

use rust_decimal::Decimal;

use crate::config::PaySchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{SalaryRecord, Task, User, YearlySalarySummary};

use super::period::{Month, Period, parse_year};
use super::work_hours::aggregate_work_hours;

/// Computes the salary record for one user and one month.
///
/// The month string is validated before any computation; a malformed key
/// fails with [`EngineError::InvalidPeriod`]. Tasks belonging to the user
/// and month are validated for negative hours, then bucketed into regular
/// and overtime components. The record satisfies
/// `overtime_pay = overtime_hours × hourly_rate × multiplier` and
/// `total_salary = base_salary + overtime_pay`.
///
/// The most recent month of an evaluation window is always unpaid: pass
/// `is_latest_month = true` for it and the record carries `paid = false`
/// with no pay date. Every other month is paid on the schedule's pay day.
///
/// # Arguments
///
/// * `user` - The user whose pay parameters apply
/// * `tasks` - The closed snapshot of tasks (filtered internally)
/// * `month` - The month key in `YYYY-MM` form
/// * `is_latest_month` - Whether this is the most recent window month
/// * `schedule` - The pay schedule (pay day, pay time, overtime multiplier)
///
/// # Examples
///
/// ```
/// use worklog_engine::aggregation::compute_salary;
/// use worklog_engine::config::PaySchedule;
/// use worklog_engine::models::User;
/// use rust_decimal::Decimal;
///
/// let user = User {
///     id: "u1".to_string(),
///     name: "Leanne Graham".to_string(),
///     base_salary: Decimal::new(5000, 0),
///     hourly_rate: Decimal::new(20, 0),
/// };
///
/// let record = compute_salary(&user, &[], "2023-03", false, &PaySchedule::default()).unwrap();
/// assert_eq!(record.id, "u1-2023-03");
/// assert_eq!(record.total_salary, Decimal::new(5000, 0));
/// assert!(record.paid);
/// ```
pub fn compute_salary(
    user: &User,
    tasks: &[Task],
    month: &str,
    is_latest_month: bool,
    schedule: &PaySchedule,
) -> EngineResult<SalaryRecord> {
    let month_key: Month = month.parse()?;
    let period = Period::Month(month_key);

    for task in tasks
        .iter()
        .filter(|t| t.user_id == user.id && period.contains(t.start_date))
    {
        task.validate()?;
    }

    let totals = aggregate_work_hours(&user.id, tasks, &period);

    let overtime_pay = totals.overtime_hours * user.hourly_rate * schedule.overtime_multiplier;
    let total_salary = user.base_salary + overtime_pay;

    let paid = !is_latest_month;
    let pay_date = if paid {
        Some(
            schedule
                .pay_date(&month_key)
                .ok_or_else(|| EngineError::CalculationError {
                    message: format!("no pay date for month {}", month_key),
                })?,
        )
    } else {
        None
    };

    Ok(SalaryRecord {
        id: format!("{}-{}", user.id, month_key),
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        month: month_key.to_string(),
        regular_hours: totals.regular_hours,
        overtime_hours: totals.overtime_hours,
        base_salary: user.base_salary,
        overtime_pay,
        total_salary,
        paid,
        pay_date,
    })
}

/// Folds monthly salary records into a yearly summary.
///
/// The fold is commutative: records may arrive in any order and the
/// totals come out the same. The monthly list in the result is always
/// sorted ascending by month. Records outside the year are ignored, so an
/// unknown user's empty record list folds to all-zero totals rather than
/// an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`] when `year` is not a four-digit
/// year string.
pub fn yearly_summary(year: &str, records: &[SalaryRecord]) -> EngineResult<YearlySalarySummary> {
    parse_year(year)?;
    let prefix = format!("{}-", year);

    let mut monthly: Vec<SalaryRecord> = records
        .iter()
        .filter(|record| record.month.starts_with(&prefix))
        .cloned()
        .collect();
    monthly.sort_by(|a, b| a.month.cmp(&b.month));

    let total_base_salary: Decimal = monthly.iter().map(|r| r.base_salary).sum();
    let total_overtime_pay: Decimal = monthly.iter().map(|r| r.overtime_pay).sum();
    let total_salary: Decimal = monthly.iter().map(|r| r.total_salary).sum();

    Ok(YearlySalarySummary {
        year: year.to_string(),
        total_base_salary,
        total_overtime_pay,
        total_salary,
        monthly_salaries: monthly,
    })
}
