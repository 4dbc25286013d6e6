//! Logging configuration and initialization.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)))
}

/// Log to stderr. `RUST_LOG` overrides the verbosity flag.
pub fn init_stderr(verbose: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init();

    if result.is_ok() {
        debug!("simmer started with verbosity level: {verbose}");
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}

/// Log to a file, for when the terminal is owned by the UI.
///
/// Falls back to discarding logs if the file cannot be opened.
pub fn init_file(path: &Path, verbose: u8) {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(verbose >= 2)
        .with_thread_ids(verbose >= 3)
        .try_init();

    if result.is_ok() {
        debug!(path = %path.display(), "Logging to file");
    }
}
