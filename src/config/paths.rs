//! Path resolution for simmer configuration and data files.
//!
//! All simmer data is stored in `~/.simmer/` unless overridden:
//! - `config.yaml` - Main configuration file
//! - `recipes-v1.json` - The recipe catalog
//! - `simmer.log` - Log output while the terminal UI is running

use std::path::PathBuf;

use crate::error::SimmerError;
use crate::recipes::CATALOG_FILE;

/// Paths to simmer configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.simmer/`
    pub root: PathBuf,
    /// Config file: `~/.simmer/config.yaml`
    pub config_file: PathBuf,
    /// Recipe catalog: `~/.simmer/recipes-v1.json`
    pub catalog: PathBuf,
    /// Log file: `~/.simmer/simmer.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SimmerError> {
        let home = std::env::var("HOME").map_err(|_| {
            SimmerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".simmer")))
    }

    /// Use `root` if given, the home directory otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, SimmerError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            catalog: root.join(CATALOG_FILE),
            log_file: root.join("simmer.log"),
            root,
        }
    }

    /// Ensure the data directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SimmerError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                SimmerError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".simmer"))
        })
    }
}
