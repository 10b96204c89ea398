//! Error types for the work-hour and salary aggregation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during aggregation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the aggregation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worklog_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod {
///     period: "2023-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid period: 2023-13");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A period key was not a valid `YYYY-MM` month or `YYYY` year string.
    #[error("Invalid period: {period}")]
    InvalidPeriod {
        /// The period string that failed to parse.
        period: String,
    },

    /// A task record was invalid or contained inconsistent data.
    #[error("Invalid task '{task_id}': {message}")]
    InvalidTask {
        /// The ID of the invalid task.
        task_id: String,
        /// A description of what made the task invalid.
        message: String,
    },

    /// A clock-in was attempted on a day that already has one.
    #[error("Duplicate clock-in for user '{user_id}' on {date}")]
    DuplicateClockIn {
        /// The user who attempted the clock-in.
        user_id: String,
        /// The day the clock-in was attempted for.
        date: NaiveDate,
    },

    /// A clock-out was attempted before any clock-in on that day.
    #[error("Clock-out without clock-in for user '{user_id}' on {date}")]
    MissingClockIn {
        /// The user who attempted the clock-out.
        user_id: String,
        /// The day the clock-out was attempted for.
        date: NaiveDate,
    },

    /// A clock-out was attempted on a day that is already completed.
    #[error("Already clocked out: user '{user_id}' on {date}")]
    AlreadyClockedOut {
        /// The user who attempted the clock-out.
        user_id: String,
        /// The day the clock-out was attempted for.
        date: NaiveDate,
    },

    /// An entity provider failed to deliver data.
    ///
    /// Surfaced to the caller unchanged; the engine performs no retries
    /// because it has no concept of the transport.
    #[error("Upstream fetch failed: {message}")]
    Upstream {
        /// A description of the upstream failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns true if this error is a clock state violation.
    ///
    /// State violations are deterministic logic errors; retrying the same
    /// call cannot succeed.
    pub fn is_state_violation(&self) -> bool {
        matches!(
            self,
            EngineError::DuplicateClockIn { .. }
                | EngineError::MissingClockIn { .. }
                | EngineError::AlreadyClockedOut { .. }
        )
    }

    /// Returns true if a caller may reasonably retry the failed operation.
    ///
    /// Only upstream fetch failures are retryable; validation and state
    /// errors are deterministic and retrying them would not change the
    /// outcome.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Upstream { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
