//! Terminal User Interface (TUI) for simmer.
//!
//! A recipe list with a mini-player, and a cooking screen for the session.
//! Built with ratatui and crossterm. Tick drivers run on a one-worker Tokio
//! runtime while the render loop stays on the calling thread.

mod app;
mod event;
mod toast;
mod ui;

pub use app::{App, Screen};
pub use toast::{Toasts, TOAST_TTL};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::cli::commands::Context;
use crate::error::SimmerError;

/// Run the TUI application, optionally cooking `start` right away.
///
/// # Errors
///
/// Returns an error if the runtime or the terminal fails to initialize, or
/// drawing fails.
pub fn run(ctx: &Context, start: Option<&str>) -> Result<(), SimmerError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("simmer-drivers")
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| SimmerError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| SimmerError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| SimmerError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(ctx);
    if let Some(id) = start {
        app.start_cooking(id);
    }
    info!("Terminal UI started");
    let result = run_app(&mut terminal, &mut app);

    // Stop the drivers before the runtime goes away
    drop(app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), SimmerError> {
    while !app.should_quit {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| SimmerError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Favorite => app.toggle_favorite()?,
            }
        }
    }

    Ok(())
}
