//! Catalog commands: list, show, add, favorite.

use std::path::Path;

use colored::Colorize;
use serde_json::json;
use tracing::info;

use super::Context;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::SimmerError;
use crate::output::{format_recipe, format_recipes, to_json};
use crate::recipes::{RecipeCatalog, RecipeDraft, RecipeQuery};

/// List recipes, filtered and sorted.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list(ctx: &Context, args: &ListArgs) -> Result<String, SimmerError> {
    let query = RecipeQuery {
        difficulties: args.difficulty.clone(),
        favorites_only: args.favorites,
        sort: args.sort,
    };
    let recipes = ctx.catalog.list();
    let shown = query.apply(&recipes);
    let title = if args.favorites { "Favorites" } else { "Recipes" };

    format_recipes(&shown, title, ctx.format)
}

/// Show a single recipe.
///
/// # Errors
///
/// Returns `SimmerError::NotFound` if no recipe has this id.
pub fn show(ctx: &Context, id: &str) -> Result<String, SimmerError> {
    let recipe = ctx
        .catalog
        .get(id)
        .ok_or_else(|| SimmerError::NotFound(format!("Recipe {id}")))?;

    format_recipe(&recipe, ctx.format)
}

/// Add a recipe from a draft file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the draft is invalid, or the
/// catalog cannot be written.
pub fn add(ctx: &Context, file: &Path) -> Result<String, SimmerError> {
    let text = std::fs::read_to_string(file)?;
    let recipe = RecipeDraft::from_yaml(&text)?.build()?;
    ctx.catalog.create(recipe.clone())?;
    info!(id = %recipe.id, title = %recipe.title, "Recipe created");

    match ctx.format {
        OutputFormat::Json => format_recipe(&recipe, ctx.format),
        OutputFormat::Pretty => Ok(format!(
            "{} Added recipe: {} ({})",
            "✓".green(),
            recipe.title.bold(),
            recipe.id.dimmed()
        )),
    }
}

/// Star, unstar, or toggle a recipe.
///
/// # Errors
///
/// Returns `SimmerError::NotFound` if no recipe has this id, or an error if
/// the catalog cannot be written.
pub fn favorite(ctx: &Context, id: &str, set: Option<bool>) -> Result<String, SimmerError> {
    let not_found = || SimmerError::NotFound(format!("Recipe {id}"));

    let is_favorite = match set {
        Some(value) => {
            if !ctx.catalog.set_favorite(id, value)? {
                return Err(not_found());
            }
            value
        }
        None => ctx.catalog.toggle_favorite(id)?.ok_or_else(not_found)?,
    };

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "id": id, "isFavorite": is_favorite })),
        OutputFormat::Pretty => Ok(if is_favorite {
            format!("{} Starred {id}", "★".yellow())
        } else {
            format!("{} Unstarred {id}", "☆".dimmed())
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::{Difficulty, SortOrder};
    use tempfile::TempDir;

    const DRAFT: &str = r"
title: Tomato Soup
difficulty: Medium
ingredients:
  - { name: Tomato, quantity: 4, unit: pcs }
steps:
  - description: Chop the tomatoes
    durationMinutes: 3
    ingredients: [Tomato]
  - description: Simmer
    type: cooking
    durationMinutes: 15
    temperature: 90
    speed: 1
";

    fn context(dir: &TempDir) -> Context {
        Context::with_root(dir.path().to_path_buf(), OutputFormat::Json)
    }

    fn add_draft(ctx: &Context, dir: &TempDir) -> String {
        let file = dir.path().join("soup.yaml");
        std::fs::write(&file, DRAFT).unwrap();
        let output = add(ctx, &file).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        value["id"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_add_then_show() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let id = add_draft(&ctx, &dir);

        let output = show(&ctx, &id).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["title"], "Tomato Soup");
        assert_eq!(value["totalTimeMinutes"], 18);
        assert_eq!(value["complexityScore"], 4);
    }

    #[test]
    fn test_show_missing() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        assert!(matches!(show(&ctx, "nope"), Err(SimmerError::NotFound(_))));
    }

    #[test]
    fn test_list_filters_by_difficulty() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        add_draft(&ctx, &dir);

        let args = ListArgs {
            difficulty: vec![Difficulty::Easy],
            sort: SortOrder::Asc,
            favorites: false,
        };
        let output = list(&ctx, &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 0);

        let output = list(&ctx, &ListArgs::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
    }

    #[test]
    fn test_favorite_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let id = add_draft(&ctx, &dir);

        favorite(&ctx, &id, None).unwrap();
        let reopened = context(&dir);
        assert!(reopened.catalog.get(&id).unwrap().is_favorite);

        favorite(&reopened, &id, Some(false)).unwrap();
        assert!(!reopened.catalog.get(&id).unwrap().is_favorite);
    }

    #[test]
    fn test_favorite_missing() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        assert!(matches!(
            favorite(&ctx, "nope", None),
            Err(SimmerError::NotFound(_))
        ));
        assert!(matches!(
            favorite(&ctx, "nope", Some(true)),
            Err(SimmerError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_invalid_draft() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let file = dir.path().join("bad.yaml");
        std::fs::write(&file, "title: Ab\ningredients: []\nsteps: []\n").unwrap();

        assert!(matches!(add(&ctx, &file), Err(SimmerError::Validation(_))));
        assert!(ctx.catalog.list().is_empty());
    }
}
