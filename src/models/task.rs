//! Task model and related types.
//!
//! This module defines the Task struct and TaskType enum for representing
//! work-log entries in the aggregation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the type of a work task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Regular scheduled work.
    Regular,
    /// Urgent work; paid at the regular rate despite the priority.
    Urgent,
    /// Overtime work; paid at the overtime multiplier.
    Overtime,
}

/// Represents a single work-log entry for a user.
///
/// Tasks are created and updated by the task-management surface; the
/// engine reads them as a closed snapshot. `actual_hours` is meaningful
/// only when `completed` is true; incomplete tasks contribute zero hours
/// to every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: String,
    /// The user the task belongs to.
    pub user_id: String,
    /// The date the task started (used for period bucketing).
    pub start_date: NaiveDate,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Hours actually worked on the task.
    pub actual_hours: Decimal,
    /// The type of the task.
    pub task_type: TaskType,
}

impl Task {
    /// Returns the hours this task contributes to aggregates.
    ///
    /// Only completed tasks contribute; an incomplete task reports zero
    /// regardless of its `actual_hours`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog_engine::models::{Task, TaskType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let task = Task {
    ///     id: "task_001".to_string(),
    ///     user_id: "u1".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
    ///     completed: false,
    ///     actual_hours: Decimal::new(10, 0),
    ///     task_type: TaskType::Overtime,
    /// };
    /// assert_eq!(task.logged_hours(), Decimal::ZERO);
    /// ```
    pub fn logged_hours(&self) -> Decimal {
        if self.completed {
            self.actual_hours
        } else {
            Decimal::ZERO
        }
    }

    /// Returns true if the task is tagged as overtime work.
    pub fn is_overtime(&self) -> bool {
        self.task_type == TaskType::Overtime
    }

    /// Validates the task's time-tracking fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTask` if `actual_hours` is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.actual_hours < Decimal::ZERO {
            return Err(EngineError::InvalidTask {
                task_id: self.id.clone(),
                message: "actual hours cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_task(completed: bool, task_type: TaskType) -> Task {
        Task {
            id: "task_001".to_string(),
            user_id: "u1".to_string(),
            start_date: make_date("2023-03-10"),
            completed,
            actual_hours: Decimal::new(8, 0),
            task_type,
        }
    }

    #[test]
    fn test_completed_task_logs_actual_hours() {
        let task = create_test_task(true, TaskType::Regular);
        assert_eq!(task.logged_hours(), Decimal::new(8, 0));
    }

    #[test]
    fn test_incomplete_task_logs_zero_hours() {
        let task = create_test_task(false, TaskType::Overtime);
        assert_eq!(task.logged_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_is_overtime_only_for_overtime_type() {
        assert!(create_test_task(true, TaskType::Overtime).is_overtime());
        assert!(!create_test_task(true, TaskType::Regular).is_overtime());
        // Urgent counts as regular work for pay purposes
        assert!(!create_test_task(true, TaskType::Urgent).is_overtime());
    }

    #[test]
    fn test_validate_accepts_zero_hours() {
        let mut task = create_test_task(true, TaskType::Regular);
        task.actual_hours = Decimal::ZERO;
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_hours() {
        let mut task = create_test_task(true, TaskType::Regular);
        task.actual_hours = Decimal::new(-1, 0);

        let result = task.validate();
        assert!(result.is_err());
        match result {
            Err(EngineError::InvalidTask { task_id, message }) => {
                assert_eq!(task_id, "task_001");
                assert!(message.contains("negative"));
            }
            _ => panic!("Expected InvalidTask error"),
        }
    }

    #[test]
    fn test_task_type_serialization() {
        assert_eq!(
            serde_json::to_string(&TaskType::Regular).unwrap(),
            "\"regular\""
        );
        assert_eq!(
            serde_json::to_string(&TaskType::Urgent).unwrap(),
            "\"urgent\""
        );
        assert_eq!(
            serde_json::to_string(&TaskType::Overtime).unwrap(),
            "\"overtime\""
        );
    }

    #[test]
    fn test_task_deserialization() {
        let json = r#"{
            "id": "task_042",
            "user_id": "u3",
            "start_date": "2023-05-02",
            "completed": true,
            "actual_hours": "6.5",
            "task_type": "urgent"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "task_042");
        assert_eq!(task.user_id, "u3");
        assert_eq!(task.start_date, make_date("2023-05-02"));
        assert!(task.completed);
        assert_eq!(task.actual_hours, Decimal::new(65, 1));
        assert_eq!(task.task_type, TaskType::Urgent);
    }

    #[test]
    fn test_task_serialization_round_trip() {
        let task = create_test_task(true, TaskType::Overtime);
        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, deserialized);
    }
}
