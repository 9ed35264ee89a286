//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ConfigError;

/// User-facing settings for the terminal app.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Title shown at the top of every screen.
    #[serde(default = "default_title")]
    title: String,

    /// File that receives the tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Prefill for the X name input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    player_x: Option<String>,

    /// Prefill for the O name input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    player_o: Option<String>,
}

fn default_title() -> String {
    "Tres en Raya".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tres_en_raya.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            player_x: None,
            player_o: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(title = %config.title, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Replaces the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Replaces the X name prefill.
    pub fn with_player_x(mut self, name: String) -> Self {
        self.player_x = Some(name);
        self
    }

    /// Replaces the O name prefill.
    pub fn with_player_o(mut self, name: String) -> Self {
        self.player_o = Some(name);
        self
    }
}
