//! Application configuration file storage.
//!
//! Loads config.toml from ~/.config/grange/. Missing files fall back to
//! defaults so a fresh install works without setup.

use crate::paths::GrangePaths;
use grange_core::error::{GrangeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the farm-management backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the default path, falling back to defaults
    /// when the file does not exist.
    pub fn load_default() -> Result<Self> {
        let path = GrangePaths::config_file()
            .map_err(|e| GrangeError::config(e.to_string()))?;
        Self::load_from(path)
    }

    /// Loads configuration from a specific path.
    ///
    /// # Returns
    ///
    /// - `Ok(AppConfig)`: Parsed config, or defaults when the file is missing
    /// - `Err(_)`: File exists but could not be read or parsed
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
