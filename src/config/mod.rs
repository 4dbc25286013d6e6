//! Configuration management for simmer.
//!
//! This module handles loading configuration from the data directory
//! (`~/.simmer/` by default).

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, CookingConfig, GeneralConfig};
