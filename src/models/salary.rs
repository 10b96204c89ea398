//! Salary record models.
//!
//! This module contains the [`SalaryRecord`] and [`YearlySalarySummary`]
//! types that capture the derived pay statement for a user and the yearly
//! rollup over monthly statements.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The canonical, derived pay statement for one user for one month.
///
/// Salary records are value objects recomputed on demand from users and
/// tasks; they are never stored independently. Two invariants hold for
/// every record: `total_salary = base_salary + overtime_pay` and
/// `overtime_pay = overtime_hours × hourly_rate × overtime multiplier`.
///
/// # Example
///
/// ```
/// use worklog_engine::models::SalaryRecord;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     id: "u1-2023-03".to_string(),
///     user_id: "u1".to_string(),
///     user_name: "Leanne Graham".to_string(),
///     month: "2023-03".to_string(),
///     regular_hours: Decimal::new(8, 0),
///     overtime_hours: Decimal::new(4, 0),
///     base_salary: Decimal::new(5000, 0),
///     overtime_pay: Decimal::new(120, 0),
///     total_salary: Decimal::new(5120, 0),
///     paid: true,
///     pay_date: None,
/// };
/// assert_eq!(record.total_salary, record.base_salary + record.overtime_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique identifier, formatted `{user_id}-{month}`.
    pub id: String,
    /// The user this statement belongs to.
    pub user_id: String,
    /// The user's display name at computation time.
    pub user_name: String,
    /// The month of the statement, formatted `YYYY-MM`.
    pub month: String,
    /// Completed-task hours not tagged overtime.
    pub regular_hours: Decimal,
    /// Completed-task hours tagged overtime.
    pub overtime_hours: Decimal,
    /// The user's fixed monthly base salary.
    pub base_salary: Decimal,
    /// Pay for overtime hours at the overtime multiplier.
    pub overtime_pay: Decimal,
    /// Base salary plus overtime pay.
    pub total_salary: Decimal,
    /// Whether the month has been paid out.
    pub paid: bool,
    /// When the month was paid, if it has been.
    pub pay_date: Option<DateTime<Utc>>,
}

/// The yearly rollup over a user's monthly salary records.
///
/// A pure fold over the records whose month falls in `year`: the three
/// totals equal the sums of the corresponding fields of
/// `monthly_salaries`, and the list is ordered ascending by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlySalarySummary {
    /// The year of the summary, formatted `YYYY`.
    pub year: String,
    /// Sum of the monthly base salaries.
    pub total_base_salary: Decimal,
    /// Sum of the monthly overtime pay.
    pub total_overtime_pay: Decimal,
    /// Sum of the monthly total salaries.
    pub total_salary: Decimal,
    /// The monthly records the totals were folded from, ascending by month.
    pub monthly_salaries: Vec<SalaryRecord>,
}
