//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use worklog_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Window covers {} months", loader.config().window.months);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/engine.yaml")
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be
    /// read and [`EngineError::ConfigParseError`] when it is not valid
    /// YAML for the expected shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the loaded engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/engine.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().window.months, 6);
        assert_eq!(
            loader.config().window.start.to_string(),
            "2023-01"
        );
    }

    #[test]
    fn test_loaded_pay_schedule() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let pay = &loader.config().pay;
        assert_eq!(pay.pay_day, 25);
        assert_eq!(pay.overtime_multiplier, Decimal::from_str("1.5").unwrap());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/engine.yaml");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_into_config_returns_loaded_values() {
        let config = ConfigLoader::load(config_path()).unwrap().into_config();
        assert_eq!(config.window.latest().unwrap().to_string(), "2023-06");
    }
}
