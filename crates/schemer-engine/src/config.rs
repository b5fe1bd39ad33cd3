//! Configuration types for schemer engine.
//!
//! This module defines the configuration schema for schemer: where the
//! color API lives, which mode to request before any modes are known, and
//! a few UI timings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration for schemer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the scheme endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Mode query fragment used until the mode list has been discovered.
    ///
    /// It is only highlighted in the discovered list if the API reports a
    /// mode with exactly this value; the public color API reports full paths
    /// (`/scheme?hex=...&mode=...&count=5`), so none is selected there.
    #[serde(default = "default_mode")]
    pub default_mode: String,

    /// How long the copy confirmation stays visible, in milliseconds.
    #[serde(default = "default_snackbar_ms")]
    pub snackbar_ms: u64,

    /// UI tick rate in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Optional request timeout in seconds. Requests are unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_api_base_url() -> String {
    "https://www.thecolorapi.com/scheme".into()
}

fn default_mode() -> String {
    "mode=monochrome".into()
}

fn default_snackbar_ms() -> u64 {
    2900
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration from a file if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Snackbar duration.
    pub fn snackbar_duration(&self) -> Duration {
        Duration::from_millis(self.snackbar_ms)
    }

    /// Request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_mode: default_mode(),
            snackbar_ms: default_snackbar_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            timeout_seconds: None,
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
