//! Configuration loader
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::default_config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File read when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "window-bindings.toml";

/// Environment variable overriding the config file path
pub const CONFIG_PATH_ENV: &str = "WINDOW_BINDINGS_CONFIG";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_query")]
    pub query: QueryConfig,

    #[serde(default = "default_capability")]
    pub capability: CapabilityConfig,

    #[serde(default = "default_watch")]
    pub watch: WatchConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// Buffer sizing for variable-length queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_path_buffer_bytes")]
    pub path_buffer_bytes: usize,
}

/// Capability probe settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityConfig {
    /// Allow resolving GetScaleFactorForMonitor at all
    #[serde(default = "default_shell_scaling")]
    pub shell_scaling: bool,
    /// Use this release string instead of the detected OS version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
}

/// Active-window watch loop settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_watch_enabled")]
    pub enabled: bool,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loader for `$WINDOW_BINDINGS_CONFIG`, or the default file name
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::new(path),
            None => Self::new(DEFAULT_CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults only when the file
    /// does not exist. Unreadable or malformed files are still errors.
    pub fn load_or_default(&self) -> Result<Config, ConfigError> {
        match self.load() {
            Err(ConfigError::FileNotFound(path)) => {
                tracing::debug!(%path, "no configuration file, using defaults");
                Ok(Config::default())
            }
            other => other,
        }
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::from_env().load_or_default()
}

// Default functions for serde
fn default_query() -> QueryConfig {
    QueryConfig {
        path_buffer_bytes: default_path_buffer_bytes(),
    }
}

fn default_capability() -> CapabilityConfig {
    CapabilityConfig {
        shell_scaling: default_shell_scaling(),
        os_version: None,
    }
}

fn default_watch() -> WatchConfig {
    WatchConfig {
        enabled: default_watch_enabled(),
        poll_interval_ms: default_poll_interval_ms(),
    }
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        with_target: default_with_target(),
    }
}

fn default_path_buffer_bytes() -> usize {
    default_config().query.path_buffer_bytes
}

fn default_shell_scaling() -> bool {
    default_config().capability.shell_scaling
}

fn default_watch_enabled() -> bool {
    default_config().watch.enabled
}

fn default_poll_interval_ms() -> u64 {
    default_config().watch.poll_interval_ms
}

fn default_log_level() -> String {
    default_config().logging.level
}

fn default_with_target() -> bool {
    default_config().logging.with_target
}

impl Default for Config {
    fn default() -> Self {
        Config {
            query: default_query(),
            capability: default_capability(),
            watch: default_watch(),
            logging: default_logging(),
        }
    }
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        default_capability()
    }
}
