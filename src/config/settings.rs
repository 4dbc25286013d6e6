//! Configuration settings for simmer.
//!
//! Settings are loaded from `config.yaml` in the data directory. Every field
//! has a default, so a partial (or missing) file is fine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::SimmerError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Cooking session settings.
    pub cooking: CookingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to `colored` output.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Cooking session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CookingConfig {
    /// Milliseconds between ticks; one tick counts as one second of cooking.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Show the mini-player on the recipe list while a session runs.
    #[serde(default = "default_true")]
    pub mini_player: bool,
    /// Show session notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

impl CookingConfig {
    /// Tick period, never shorter than one millisecond.
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_tick_interval() -> u64 {
    1000
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for CookingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            mini_player: default_true(),
            notifications: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SimmerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SimmerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            SimmerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
