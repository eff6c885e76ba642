//! Configuration module
//!
//! Provides configuration loading, validation, and default settings for
//! buffer sizing, the capability probe, the watch loop and logging.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults, DEFAULT_PATH_BUFFER_BYTES};
pub use loader::{load_config, ConfigLoader, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
pub use validator::{validate_config, ConfigValidator};

// Re-export the configuration structures
pub use loader::{CapabilityConfig, Config, LoggingConfig, QueryConfig, WatchConfig};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
