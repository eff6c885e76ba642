//! Configuration validator
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{CapabilityConfig, Config, ConfigError, LoggingConfig, QueryConfig, WatchConfig};
use crate::capability::OsVersion;

/// Smallest path buffer accepted: MAX_PATH units
const MIN_PATH_BUFFER_BYTES: usize = 260 * 2;

/// Largest path buffer accepted
const MAX_PATH_BUFFER_BYTES: usize = 1024 * 1024;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_query(&config.query)?;
        Self::validate_capability(&config.capability)?;
        Self::validate_watch(&config.watch)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    fn validate_query(query: &QueryConfig) -> Result<(), ConfigError> {
        if query.path_buffer_bytes % 2 != 0 {
            return Err(ConfigError::Invalid(
                "Path buffer size must be a whole number of UTF-16 units".to_string(),
            ));
        }

        if query.path_buffer_bytes < MIN_PATH_BUFFER_BYTES {
            return Err(ConfigError::Invalid(format!(
                "Path buffer must be at least {} bytes",
                MIN_PATH_BUFFER_BYTES
            )));
        }

        if query.path_buffer_bytes > MAX_PATH_BUFFER_BYTES {
            return Err(ConfigError::Invalid(format!(
                "Path buffer cannot exceed {} bytes",
                MAX_PATH_BUFFER_BYTES
            )));
        }

        Ok(())
    }

    fn validate_capability(capability: &CapabilityConfig) -> Result<(), ConfigError> {
        if let Some(version) = &capability.os_version {
            version.parse::<OsVersion>().map_err(|err| {
                ConfigError::Invalid(format!("Capability os_version override: {}", err))
            })?;
        }
        Ok(())
    }

    fn validate_watch(watch: &WatchConfig) -> Result<(), ConfigError> {
        if watch.poll_interval_ms < 10 {
            return Err(ConfigError::Invalid(
                "Poll interval must be at least 10 ms".to_string(),
            ));
        }

        if watch.poll_interval_ms > 60_000 {
            return Err(ConfigError::Invalid(
                "Poll interval cannot exceed 60000 ms".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {}",
                logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}

/// Validates the configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
