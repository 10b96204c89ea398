//! Configuration types for the aggregation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the engine's YAML configuration file.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::aggregation::Month;

/// The evaluation window for salary generation.
///
/// Salary records are generated for a fixed run of consecutive months;
/// the most recent month of the window is the one reported unpaid.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryWindow {
    /// The first month of the window.
    pub start: Month,
    /// How many consecutive months the window covers.
    pub months: u32,
}

impl SalaryWindow {
    /// Returns the window's month keys in ascending order.
    pub fn month_keys(&self) -> Vec<Month> {
        let mut keys = Vec::with_capacity(self.months as usize);
        let mut current = self.start;
        for _ in 0..self.months {
            keys.push(current);
            current = current.succ();
        }
        keys
    }

    /// Returns the most recent month of the window.
    pub fn latest(&self) -> Option<Month> {
        self.month_keys().last().copied()
    }

    /// Returns true if the given month falls inside the window.
    pub fn contains(&self, month: &Month) -> bool {
        self.month_keys().contains(month)
    }
}

impl Default for SalaryWindow {
    fn default() -> Self {
        Self {
            start: "2023-01".parse().expect("valid month literal"),
            months: 6,
        }
    }
}

/// The pay schedule applied to every paid month.
#[derive(Debug, Clone, Deserialize)]
pub struct PaySchedule {
    /// Day of the month salaries are paid out on.
    pub pay_day: u32,
    /// Time of day (UTC) salaries are paid out at.
    pub pay_time: NaiveTime,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

impl PaySchedule {
    /// Returns the pay-out timestamp for a month.
    ///
    /// `None` when the configured pay day does not exist in the month
    /// (for example day 31 in February).
    pub fn pay_date(&self, month: &Month) -> Option<DateTime<Utc>> {
        Some(month.with_day(self.pay_day)?.and_time(self.pay_time).and_utc())
    }
}

impl Default for PaySchedule {
    fn default() -> Self {
        Self {
            pay_day: 25,
            pay_time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time literal"),
            overtime_multiplier: Decimal::new(15, 1),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// The salary evaluation window.
    #[serde(default)]
    pub window: SalaryWindow,
    /// The pay schedule.
    #[serde(default)]
    pub pay: PaySchedule,
}
