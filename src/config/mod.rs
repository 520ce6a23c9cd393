//! Configuration module.
//!
//! Handles the locale, error policy and grid layout settings.

mod settings;

pub use settings::{
    ErrorPolicy, ErrorSettings, GridSettings, Settings, SettingsError, CONFIG_ENV_VAR,
};
