//! Progress figures derived from a session and its recipe.
//!
//! A step with a zero duration counts as already complete: its progress is
//! 1.0 and it contributes a full step to the overall figure.

use serde::Serialize;

use super::state::Session;
use crate::recipes::{Recipe, RecipeStep};

/// Where a step sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Finished
    Done,
    /// In progress
    Current,
    /// Not reached yet
    Upcoming,
}

/// Fraction (0.0 - 1.0) of a step completed after `elapsed` seconds.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn step_progress(step: &RecipeStep, elapsed: u64) -> f64 {
    let total = step.duration_secs();
    if total == 0 {
        return 1.0;
    }
    (elapsed as f64 / total as f64).min(1.0)
}

/// Seconds left in a step, never negative.
#[must_use]
pub const fn remaining_secs(step: &RecipeStep, elapsed: u64) -> u64 {
    step.duration_secs().saturating_sub(elapsed)
}

/// Fraction (0.0 - 1.0) of the whole recipe completed.
///
/// Idle sessions and sessions on another recipe report 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn overall_progress(recipe: &Recipe, session: &Session) -> f64 {
    let Some(active) = session.active().filter(|a| a.recipe_id == recipe.id) else {
        return 0.0;
    };
    let total = recipe.step_count();
    if total == 0 {
        return 0.0;
    }

    let current = recipe
        .step(active.step_index)
        .map_or(0.0, |step| step_progress(step, active.elapsed));
    ((active.step_index as f64 + current) / total as f64).min(1.0)
}

/// Status of step `index` while the session sits at `current`.
#[must_use]
pub const fn step_status(index: usize, current: usize) -> StepStatus {
    if index < current {
        StepStatus::Done
    } else if index == current {
        StepStatus::Current
    } else {
        StepStatus::Upcoming
    }
}

/// Status of every step of a recipe.
#[must_use]
pub fn timeline(recipe: &Recipe, session: &Session) -> Vec<StepStatus> {
    let current = session
        .active()
        .filter(|a| a.recipe_id == recipe.id)
        .map(|a| a.step_index);

    (0..recipe.step_count())
        .map(|i| current.map_or(StepStatus::Upcoming, |c| step_status(i, c)))
        .collect()
}

/// Format seconds as MM:SS.
#[must_use]
pub fn format_mmss(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::types::fixtures::recipe_with_durations;
    use crate::session::state::ActiveSession;

    fn at(recipe_id: &str, step_index: usize, elapsed: u64) -> Session {
        Session::Running(ActiveSession {
            recipe_id: recipe_id.to_string(),
            step_index,
            elapsed,
            paused: false,
        })
    }

    #[test]
    fn test_step_progress() {
        let recipe = recipe_with_durations("r1", &[5]);
        let step = &recipe.steps[0];

        assert_eq!(step_progress(step, 0), 0.0);
        assert!((step_progress(step, 150) - 0.5).abs() < f64::EPSILON);
        assert_eq!(step_progress(step, 900), 1.0);
    }

    #[test]
    fn test_zero_duration_step_is_complete() {
        let recipe = recipe_with_durations("r1", &[0, 10]);
        assert_eq!(step_progress(&recipe.steps[0], 0), 1.0);
        assert_eq!(remaining_secs(&recipe.steps[0], 0), 0);
        assert!((overall_progress(&recipe, &at("r1", 0, 0)) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remaining_saturates() {
        let recipe = recipe_with_durations("r1", &[1]);
        assert_eq!(remaining_secs(&recipe.steps[0], 45), 15);
        assert_eq!(remaining_secs(&recipe.steps[0], 61), 0);
    }

    #[test]
    fn test_overall_progress() {
        let recipe = recipe_with_durations("r1", &[5, 5, 5, 5]);

        assert_eq!(overall_progress(&recipe, &Session::Idle), 0.0);
        assert_eq!(overall_progress(&recipe, &at("other", 2, 0)), 0.0);
        assert!((overall_progress(&recipe, &at("r1", 2, 150)) - 0.625).abs() < 1e-9);
    }

    #[test]
    fn test_timeline() {
        let recipe = recipe_with_durations("r1", &[1, 1, 1]);
        assert_eq!(
            timeline(&recipe, &at("r1", 1, 0)),
            [StepStatus::Done, StepStatus::Current, StepStatus::Upcoming]
        );
        assert_eq!(timeline(&recipe, &Session::Idle), [StepStatus::Upcoming; 3]);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(25 * 60), "25:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
        assert_eq!(render_progress_bar(2.0, 4), "[████]");
    }
}
