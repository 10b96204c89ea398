//! User model.
//!
//! This module defines the User struct representing an employee whose
//! work hours and pay are aggregated by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee with their pay parameters.
///
/// Pay parameters are authoritative inputs supplied by an external HR
/// system; the engine never generates or mutates them. A `User` is an
/// immutable snapshot for the duration of a computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// The user's display name, carried into derived salary records.
    pub name: String,
    /// The fixed monthly base salary.
    pub base_salary: Decimal,
    /// The hourly rate used for overtime pay.
    pub hourly_rate: Decimal,
}
