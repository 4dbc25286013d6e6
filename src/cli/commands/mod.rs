//! Command implementations for simmer.
//!
//! Every command returns the text to print; `main` does the printing.

mod cook;
mod recipes;

pub use cook::{cook, cook_headless};
pub use recipes::{add, favorite, list, show};

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::SimmerError;
use crate::recipes::JsonCatalog;

/// Everything a command needs: where data lives, the loaded config, the
/// catalog, and how to format results.
#[derive(Debug)]
pub struct Context {
    /// Data directory layout
    pub paths: Paths,
    /// Loaded configuration
    pub config: Config,
    /// The recipe catalog
    pub catalog: Arc<JsonCatalog>,
    /// Output format for results
    pub format: OutputFormat,
}

impl Context {
    /// Load config and catalog from the data directory.
    ///
    /// `output` overrides the configured default output format.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved or the
    /// config file is invalid.
    pub fn load(
        data_dir: Option<PathBuf>,
        output: Option<OutputFormat>,
    ) -> Result<Self, SimmerError> {
        let paths = Paths::resolve(data_dir)?;
        let config = Config::load_from_path(&paths.config_file)?;
        let format = output.unwrap_or(config.general.default_output);
        let catalog = Arc::new(JsonCatalog::open(&paths.catalog));
        debug!(root = %paths.root.display(), ?format, "Context loaded");

        Ok(Self {
            paths,
            config,
            catalog,
            format,
        })
    }

    /// Context over an explicit data directory with default settings.
    #[must_use]
    pub fn with_root(root: PathBuf, format: OutputFormat) -> Self {
        let paths = Paths::with_root(root);
        let catalog = Arc::new(JsonCatalog::open(&paths.catalog));
        Self {
            paths,
            config: Config::default(),
            catalog,
            format,
        }
    }
}

/// Write shell completions to stdout.
pub fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
