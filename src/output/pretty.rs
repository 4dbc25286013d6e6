use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::recipes::{Difficulty, Recipe, RecipeStep, StepKind};
use crate::session::{
    format_mmss, overall_progress, remaining_secs, render_progress_bar, step_progress, Session,
};

fn difficulty_label(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => difficulty.display_name().green(),
        Difficulty::Medium => difficulty.display_name().yellow(),
        Difficulty::Hard => difficulty.display_name().red(),
    }
}

fn favorite_icon(recipe: &Recipe) -> ColoredString {
    if recipe.is_favorite {
        "★".yellow()
    } else {
        "☆".dimmed()
    }
}

/// Format a list of recipes as a pretty table
pub fn format_recipes_pretty(recipes: &[&Recipe], title: &str) -> String {
    if recipes.is_empty() {
        return format!("{title} (0 recipes)\n  No recipes found.");
    }

    let mut output = format!("{} ({} recipes)\n", title, recipes.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for recipe in recipes {
        let mut line = format!(
            "{} {}  {}  {}",
            favorite_icon(recipe),
            recipe.title.bold(),
            difficulty_label(recipe.difficulty),
            format!("⏱ {} mins", recipe.total_time_minutes).cyan()
        );

        if !recipe.cuisine.is_empty() {
            let _ = write!(line, "  {}", recipe.cuisine.dimmed());
        }
        let _ = write!(line, "  {}", recipe.id.dimmed());

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format one step as a single line, numbered from 1
pub fn format_step_pretty(recipe: &Recipe, index: usize, step: &RecipeStep) -> String {
    let mut line = format!(
        "{}. {} {}",
        index + 1,
        step.description,
        format!("({} min)", step.duration_minutes).dimmed()
    );

    match &step.kind {
        StepKind::Cooking { settings } => {
            let _ = write!(
                line,
                "  {}",
                format!("🔥 {}°C · speed {}", settings.temperature, settings.speed).red()
            );
        }
        StepKind::Instruction { ingredient_ids } if !ingredient_ids.is_empty() => {
            let names = recipe.step_ingredient_labels(step).join(", ");
            let _ = write!(line, "  {}", format!("uses {names}").cyan());
        }
        StepKind::Instruction { .. } => {}
    }

    line
}

/// Format a single recipe as pretty output
pub fn format_recipe_pretty(recipe: &Recipe) -> String {
    let mut output = format!("{} {}\n", favorite_icon(recipe), recipe.title.bold());
    let _ = writeln!(output, "  {}: {}", "ID".dimmed(), recipe.id);
    let _ = writeln!(
        output,
        "  {}: {}",
        "Difficulty".dimmed(),
        difficulty_label(recipe.difficulty)
    );
    if !recipe.cuisine.is_empty() {
        let _ = writeln!(output, "  {}: {}", "Cuisine".dimmed(), recipe.cuisine);
    }
    let _ = writeln!(
        output,
        "  {}: {} mins",
        "Total time".dimmed(),
        recipe.total_time_minutes
    );
    let _ = writeln!(
        output,
        "  {}: {}",
        "Complexity".dimmed(),
        recipe.complexity_score
    );

    let _ = writeln!(output, "  {}:", "Ingredients".dimmed());
    for ingredient in &recipe.ingredients {
        let _ = writeln!(
            output,
            "    • {} {} {}",
            ingredient.quantity, ingredient.unit, ingredient.name
        );
    }

    let _ = writeln!(output, "  {}:", "Steps".dimmed());
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(output, "    {}", format_step_pretty(recipe, i, step));
    }

    let _ = writeln!(
        output,
        "  {}: {}",
        "Created".dimmed(),
        recipe.created_at.format("%Y-%m-%d %H:%M")
    );

    output
}

/// One-line status of a running session, for the headless cooking mode
pub fn format_session_line(recipe: &Recipe, session: &Session) -> String {
    let Some(active) = session.active() else {
        return "Idle".dimmed().to_string();
    };
    let Some(step) = recipe.step(active.step_index) else {
        return String::new();
    };

    let state = if active.paused {
        "Paused".yellow()
    } else {
        "Running".green()
    };

    format!(
        "Step {}/{} {} {} left · overall {} [{}]",
        active.step_index + 1,
        recipe.step_count(),
        render_progress_bar(step_progress(step, active.elapsed), 20),
        format_mmss(remaining_secs(step, active.elapsed)),
        render_progress_bar(overall_progress(recipe, session), 10),
        state
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::types::fixtures::recipe_with_durations;

    #[test]
    fn test_empty_list() {
        let output = format_recipes_pretty(&[], "Recipes");
        assert!(output.contains("No recipes found."));
    }

    #[test]
    fn test_list_contains_titles() {
        colored::control::set_override(false);
        let a = recipe_with_durations("a", &[5]);
        let b = recipe_with_durations("b", &[10]);
        let output = format_recipes_pretty(&[&a, &b], "Recipes");

        assert!(output.contains("Recipes (2 recipes)"));
        assert!(output.contains("Recipe a"));
        assert!(output.contains("⏱ 10 mins"));
    }

    #[test]
    fn test_recipe_detail() {
        colored::control::set_override(false);
        let recipe = recipe_with_durations("r1", &[5, 3]);
        let output = format_recipe_pretty(&recipe);

        assert!(output.contains("Total time: 8 mins"));
        assert!(output.contains("2 pcs Tomato"));
        assert!(output.contains("1. Step 1 (5 min)"));
        assert!(output.contains("100°C"));
    }

    #[test]
    fn test_session_line() {
        colored::control::set_override(false);
        let recipe = recipe_with_durations("r1", &[1, 1]);
        let session = Session::started("r1");
        let line = format_session_line(&recipe, &session);

        assert!(line.starts_with("Step 1/2"));
        assert!(line.contains("01:00 left"));
        assert!(line.contains("Running"));
    }
}
