//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use pressroom_infra::DEFAULT_STORAGE_KEY;

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Storage key the post collection lives under.
    pub storage_key: String,
    /// Directory for file-backed storage. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Emit JSON logs instead of the pretty format.
    pub json_logs: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            json_logs: false,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            storage_key: env::var("PRESSROOM_STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string()),
            data_dir: env::var("PRESSROOM_DATA_DIR").ok().map(PathBuf::from),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
