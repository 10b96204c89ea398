//! Entity providers.
//!
//! The engine never fetches data itself: users, tasks, and clock events
//! arrive through the [`EntityProvider`] trait as immutable snapshots,
//! and any transport failure is surfaced as an upstream error for the
//! caller's own retry policy. [`MemoryProvider`] is a deterministic
//! in-memory implementation for tests, demos, and benchmarks.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{ClockEvent, Task, User};

/// A source of the entities the engine aggregates over.
///
/// Implementations own all I/O and asynchrony; each method returns a
/// fresh snapshot, and the engine treats the result as read-only. A
/// failed fetch should be reported as [`EngineError::Upstream`] so it
/// propagates to the caller unchanged.
///
/// [`EngineError::Upstream`]: crate::error::EngineError::Upstream
pub trait EntityProvider {
    /// Lists all known users.
    fn users(&self) -> EngineResult<Vec<User>>;

    /// Lists tasks, optionally restricted to one user.
    fn tasks(&self, user_id: Option<&str>) -> EngineResult<Vec<Task>>;

    /// Lists the clock events recorded for a user on a date, in the
    /// order they were recorded.
    fn clock_events(&self, user_id: &str, date: NaiveDate) -> EngineResult<Vec<ClockEvent>>;
}

/// An in-memory entity provider.
///
/// Holds fixed collections and never fails. Fixture data for tests and
/// demos is constructed explicitly; the provider introduces no
/// randomness of its own.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    users: Vec<User>,
    tasks: Vec<Task>,
    events: HashMap<(String, NaiveDate), Vec<ClockEvent>>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds users to the provider.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users.extend(users);
        self
    }

    /// Adds tasks to the provider.
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Records clock events for a user on a date.
    pub fn with_clock_events(
        mut self,
        user_id: &str,
        date: NaiveDate,
        events: Vec<ClockEvent>,
    ) -> Self {
        self.events
            .entry((user_id.to_string(), date))
            .or_default()
            .extend(events);
        self
    }
}

impl EntityProvider for MemoryProvider {
    fn users(&self) -> EngineResult<Vec<User>> {
        Ok(self.users.clone())
    }

    fn tasks(&self, user_id: Option<&str>) -> EngineResult<Vec<Task>> {
        Ok(self
            .tasks
            .iter()
            .filter(|task| user_id.is_none_or(|id| task.user_id == id))
            .cloned()
            .collect())
    }

    fn clock_events(&self, user_id: &str, date: NaiveDate) -> EngineResult<Vec<ClockEvent>> {
        Ok(self
            .events
            .get(&(user_id.to_string(), date))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockEventKind, ClockLocation, TaskType};
    use chrono::TimeZone;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            base_salary: Decimal::new(5000, 0),
            hourly_rate: Decimal::new(20, 0),
        }
    }

    fn create_task(id: &str, user_id: &str) -> Task {
        Task {
            id: id.to_string(),
            user_id: user_id.to_string(),
            start_date: make_date("2023-03-10"),
            completed: true,
            actual_hours: Decimal::new(8, 0),
            task_type: TaskType::Regular,
        }
    }

    #[test]
    fn test_empty_provider_returns_empty_snapshots() {
        let provider = MemoryProvider::new();

        assert!(provider.users().unwrap().is_empty());
        assert!(provider.tasks(None).unwrap().is_empty());
        assert!(
            provider
                .clock_events("u1", make_date("2023-03-15"))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_tasks_filtered_by_user() {
        let provider = MemoryProvider::new()
            .with_tasks(vec![create_task("t1", "u1"), create_task("t2", "u2")]);

        let all = provider.tasks(None).unwrap();
        assert_eq!(all.len(), 2);

        let filtered = provider.tasks(Some("u1")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "t1");
    }

    #[test]
    fn test_clock_events_keyed_by_user_and_date() {
        let date = make_date("2023-03-15");
        let event = ClockEvent {
            kind: ClockEventKind::ClockIn,
            time: Utc.with_ymd_and_hms(2023, 3, 15, 9, 0, 0).unwrap(),
            location: ClockLocation {
                address: "100 Main St".to_string(),
                in_range: true,
            },
        };

        let provider = MemoryProvider::new().with_clock_events("u1", date, vec![event.clone()]);

        assert_eq!(provider.clock_events("u1", date).unwrap(), vec![event]);
        assert!(
            provider
                .clock_events("u2", date)
                .unwrap()
                .is_empty()
        );
        assert!(
            provider
                .clock_events("u1", make_date("2023-03-16"))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_users_snapshot() {
        let provider = MemoryProvider::new().with_users(vec![create_user("u1"), create_user("u2")]);
        let users = provider.users().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "u1");
    }
}
