//! Cooking command: the terminal UI, or a plain progress line.

use std::io::{self, Write};
use std::sync::Arc;

use colored::Colorize;
use serde_json::json;
use tracing::{debug, info};

use super::Context;
use crate::cli::args::{CookArgs, OutputFormat};
use crate::error::SimmerError;
use crate::notify::{ConsoleSink, NotificationSink, Silent};
use crate::output::{format_session_line, to_json};
use crate::recipes::{Recipe, RecipeCatalog};
use crate::session::{SharedSession, TickDriver};

/// Run a cooking session.
///
/// Opens the terminal UI unless `--headless` is given.
///
/// # Errors
///
/// Returns `SimmerError::NotFound` if the recipe does not exist, or an error
/// if the terminal or runtime cannot be set up.
pub fn cook(ctx: &Context, args: &CookArgs) -> Result<String, SimmerError> {
    if let Some(id) = args.id.as_deref() {
        if ctx.catalog.get(id).is_none() {
            return Err(SimmerError::NotFound(format!("Recipe {id}")));
        }
    }

    match args.id.as_deref() {
        Some(id) if args.headless => cook_headless(ctx, id),
        start => {
            crate::tui::run(ctx, start)?;
            Ok(String::new())
        }
    }
}

/// Cook a recipe with progress printed to stderr until it completes or
/// Ctrl-C is pressed.
///
/// Pretty output redraws one status line; JSON output writes one session
/// record per change.
///
/// # Errors
///
/// Returns `SimmerError::NotFound` if the recipe does not exist, or an error
/// if the runtime cannot be built.
pub fn cook_headless(ctx: &Context, id: &str) -> Result<String, SimmerError> {
    let recipe = ctx
        .catalog
        .get(id)
        .ok_or_else(|| SimmerError::NotFound(format!("Recipe {id}")))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(run_headless(ctx, &recipe));

    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "recipeId": recipe.id,
            "completed": outcome == Outcome::Completed,
        })),
        OutputFormat::Pretty => Ok(match outcome {
            Outcome::Completed => format!("{} Finished cooking {}", "✓".green(), recipe.title.bold()),
            Outcome::Stopped => format!("{} Stopped cooking {}", "■".yellow(), recipe.title.bold()),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Completed,
    Stopped,
}

async fn run_headless(ctx: &Context, recipe: &Recipe) -> Outcome {
    let sink: Arc<dyn NotificationSink> = if ctx.config.cooking.notifications {
        Arc::new(ConsoleSink)
    } else {
        Arc::new(Silent)
    };
    let session = SharedSession::new(sink);
    let mut changes = session.subscribe();
    let catalog: Arc<dyn RecipeCatalog> = ctx.catalog.clone();

    session.start(&recipe.id);
    let driver = TickDriver::mount(
        "headless",
        session.clone(),
        catalog,
        ctx.config.cooking.tick_period(),
    );
    info!(recipe = %recipe.id, "Headless cooking started");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut stderr = io::stderr();

    let outcome = loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break Outcome::Stopped;
                }
                let current = changes.borrow_and_update().clone();
                if !current.is_active() {
                    break Outcome::Completed;
                }
                match ctx.format {
                    OutputFormat::Pretty => {
                        let _ = write!(stderr, "\r{}", format_session_line(recipe, &current));
                    }
                    OutputFormat::Json => {
                        if let Ok(line) = serde_json::to_string(&current.view()) {
                            let _ = writeln!(stderr, "{line}");
                        }
                    }
                }
                let _ = stderr.flush();
            }
            _ = &mut ctrl_c => {
                debug!("Interrupted");
                session.end();
                break Outcome::Stopped;
            }
        }
    };

    if ctx.format == OutputFormat::Pretty {
        let _ = writeln!(stderr);
    }
    driver.unmount();
    outcome
}
