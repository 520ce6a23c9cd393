//! TOML-based configuration for the calendar engine.
//!
//! Example configuration:
//! ```toml
//! locale = "english"
//!
//! [errors]
//! policy = "fallback"
//!
//! [grid]
//! week_start = "monday"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::Weekday;
use crate::names::Locale;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GEEZ_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Language for month and weekday names.
    pub locale: Locale,

    /// Error handling for range and grid helpers.
    pub errors: ErrorSettings,

    /// Month grid layout.
    pub grid: GridSettings,
}

/// How higher-level helpers react to invalid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Return the typed error to the caller.
    #[default]
    Propagate,
    /// Log a warning and substitute a fallback value: a `(today, today)`
    /// range or an empty grid.
    Fallback,
}

/// Error handling configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ErrorSettings {
    pub policy: ErrorPolicy,
}

/// Month grid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GridSettings {
    /// First column of each week row.
    pub week_start: Weekday,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sunday,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `GEEZ_CONFIG`
    /// 2. `./geez.toml`
    /// 3. `~/.config/geez/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("geez.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("geez").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.errors.policy = policy;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.grid.week_start = week_start;
        self
    }
}
