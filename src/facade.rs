//! Read-only query facade.
//!
//! [`WorklogEngine`] combines an entity provider with the engine
//! configuration and exposes the salary and attendance projections.
//! Every operation recomputes from a fresh provider snapshot; nothing is
//! cached or mutated, so calls for different users (or different periods
//! of the same user) may run fully in parallel. Calendar time is always
//! an explicit argument.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::aggregation::{compute_salary, yearly_summary};
use crate::attendance::{self, AttendanceSummary, business_days_through, derive_day};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceDayRecord, ClockLocation, SalaryRecord, YearlySalarySummary};
use crate::provider::EntityProvider;

/// The engine's query surface.
///
/// A thin orchestration layer over the aggregation and attendance
/// modules: it fetches snapshots from the provider, delegates the
/// computation, and adds no logic of its own. Read paths are total for
/// "no data" cases (an unknown user yields an empty list or `None`, never
/// an error), while invalid input, clock state violations, and upstream
/// failures surface as errors.
pub struct WorklogEngine<P> {
    provider: P,
    config: EngineConfig,
}

impl<P: EntityProvider> WorklogEngine<P> {
    /// Creates an engine over the given provider and configuration.
    pub fn new(provider: P, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates salary records for every configured window month.
    ///
    /// With `user_id` set, only that user's records are generated; an
    /// unknown id yields an empty list. Records come out grouped by user,
    /// months ascending within each user.
    pub fn generate_salary_records(
        &self,
        user_id: Option<&str>,
    ) -> EngineResult<Vec<SalaryRecord>> {
        let mut users = self.provider.users()?;
        if let Some(id) = user_id {
            users.retain(|user| user.id == id);
        }

        let tasks = self.provider.tasks(None)?;
        let months = self.config.window.month_keys();
        let latest = self.config.window.latest();

        let mut records = Vec::with_capacity(users.len() * months.len());
        for user in &users {
            for month in &months {
                let is_latest = latest.as_ref() == Some(month);
                records.push(compute_salary(
                    user,
                    &tasks,
                    &month.to_string(),
                    is_latest,
                    &self.config.pay,
                )?);
            }
        }

        debug!(
            user_count = users.len(),
            record_count = records.len(),
            "generated salary records"
        );
        Ok(records)
    }

    /// Returns all salary records for one user, months ascending.
    ///
    /// An unknown user yields an empty list, not an error.
    pub fn user_salary_records(&self, user_id: &str) -> EngineResult<Vec<SalaryRecord>> {
        self.generate_salary_records(Some(user_id))
    }

    /// Returns the salary record for the calendar-current month.
    ///
    /// `None` when the current month is outside the configured window or
    /// the user is unknown.
    pub fn current_month_salary(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<Option<SalaryRecord>> {
        let current_month = now.format("%Y-%m").to_string();
        let records = self.user_salary_records(user_id)?;
        Ok(records.into_iter().find(|r| r.month == current_month))
    }

    /// Returns the yearly salary summary for one user.
    ///
    /// The fold runs over the user's window records whose month falls in
    /// `year`; an unknown user folds to all-zero totals.
    pub fn yearly_salary(&self, user_id: &str, year: &str) -> EngineResult<YearlySalarySummary> {
        let records = self.user_salary_records(user_id)?;
        yearly_summary(year, &records)
    }

    /// Derives the attendance record for one user and date.
    pub fn attendance_day(
        &self,
        user_id: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> EngineResult<AttendanceDayRecord> {
        let events = self.provider.clock_events(user_id, date)?;
        derive_day(user_id, date, &events, now.date_naive())
    }

    /// Derives one record per business day of the current week.
    ///
    /// The window runs from Monday through the current date; weekends are
    /// excluded and no record is fabricated for future dates.
    pub fn week_attendance(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<Vec<AttendanceDayRecord>> {
        let today = now.date_naive();
        let mut records = Vec::new();
        for date in business_days_through(today) {
            let events = self.provider.clock_events(user_id, date)?;
            records.push(derive_day(user_id, date, &events, today)?);
        }
        Ok(records)
    }

    /// Summarizes the current week's attendance for one user.
    pub fn week_attendance_summary(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<AttendanceSummary> {
        let records = self.week_attendance(user_id, now)?;
        Ok(attendance::summarize(&records))
    }

    /// Records a clock-in for today and returns the new day record.
    ///
    /// The current record is derived from the provider's events for the
    /// day; persisting the returned record is the caller's concern.
    pub fn clock_in(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        location: ClockLocation,
    ) -> EngineResult<AttendanceDayRecord> {
        let today = now.date_naive();
        let events = self.provider.clock_events(user_id, today)?;
        let record = derive_day(user_id, today, &events, today)?;

        let result = attendance::clock_in(&record, now, location);
        if let Err(error) = &result {
            warn!(user_id, %today, %error, "clock-in rejected");
        }
        result
    }

    /// Records a clock-out for today and returns the new day record.
    pub fn clock_out(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        location: ClockLocation,
    ) -> EngineResult<AttendanceDayRecord> {
        let today = now.date_naive();
        let events = self.provider.clock_events(user_id, today)?;
        let record = derive_day(user_id, today, &events, today)?;

        let result = attendance::clock_out(&record, now, location);
        if let Err(error) = &result {
            warn!(user_id, %today, %error, "clock-out rejected");
        }
        result
    }
}
