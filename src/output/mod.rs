//! Output formatting for simmer.
//!
//! This module provides formatters for displaying recipes in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::SimmerError;
use crate::recipes::Recipe;

pub use json::*;
pub use pretty::*;

/// Format recipes based on output format
///
/// # Errors
///
/// Returns `SimmerError::Parse` if JSON serialization fails.
pub fn format_recipes(
    recipes: &[&Recipe],
    title: &str,
    format: OutputFormat,
) -> Result<String, SimmerError> {
    match format {
        OutputFormat::Pretty => Ok(format_recipes_pretty(recipes, title)),
        OutputFormat::Json => format_recipes_json(recipes),
    }
}

/// Format a single recipe based on output format
///
/// # Errors
///
/// Returns `SimmerError::Parse` if JSON serialization fails.
pub fn format_recipe(recipe: &Recipe, format: OutputFormat) -> Result<String, SimmerError> {
    match format {
        OutputFormat::Pretty => Ok(format_recipe_pretty(recipe)),
        OutputFormat::Json => format_recipe_json(recipe),
    }
}
