//! Default configuration values

use serde::{Deserialize, Serialize};

/// Byte budget of the process path buffer (33 000 UTF-16 units)
pub const DEFAULT_PATH_BUFFER_BYTES: usize = 66_000;

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub query: QueryDefaults,
    pub capability: CapabilityDefaults,
    pub watch: WatchDefaults,
    pub logging: LoggingDefaults,
}

/// Default query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDefaults {
    pub path_buffer_bytes: usize,
}

/// Default capability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapabilityDefaults {
    pub shell_scaling: bool,
}

/// Default watch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchDefaults {
    pub enabled: bool,
    pub poll_interval_ms: u64,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
    pub with_target: bool,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        query: QueryDefaults {
            path_buffer_bytes: DEFAULT_PATH_BUFFER_BYTES,
        },
        capability: CapabilityDefaults {
            shell_scaling: true,
        },
        watch: WatchDefaults {
            enabled: false,
            poll_interval_ms: 500,
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
            with_target: false,
        },
    }
}
