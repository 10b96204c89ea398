//! Configuration loading and management for the aggregation engine.
//!
//! This module provides the typed engine configuration (evaluation
//! window and pay schedule) and a loader that reads it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use worklog_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Pay day: {}", loader.config().pay.pay_day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, PaySchedule, SalaryWindow};
