//! The cooking session record.
//!
//! A session is either idle or running one recipe. The idle variant carries no
//! data, so "inactive implies no recipe, step 0, nothing elapsed, not paused"
//! cannot be violated.

use serde::{Deserialize, Serialize};

/// Progress through a recipe while a session runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    /// Recipe being cooked
    pub recipe_id: String,
    /// Zero-based index of the current step
    pub step_index: usize,
    /// Seconds elapsed within the current step
    pub elapsed: u64,
    /// Whether the countdown is paused
    pub paused: bool,
}

/// The single cooking session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Session {
    /// No session in progress.
    #[default]
    Idle,
    /// A session is in progress.
    Running(ActiveSession),
}

impl Session {
    /// Running state at the first step of a recipe.
    #[must_use]
    pub fn started(recipe_id: impl Into<String>) -> Self {
        Self::Running(ActiveSession {
            recipe_id: recipe_id.into(),
            step_index: 0,
            elapsed: 0,
            paused: false,
        })
    }

    /// The running session, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveSession> {
        match self {
            Self::Running(active) => Some(active),
            Self::Idle => None,
        }
    }

    /// True iff a session is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Running(_))
    }

    /// True iff a session is in progress and paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self, Self::Running(ActiveSession { paused: true, .. }))
    }

    /// Active and not paused: the only state in which time advances.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        matches!(self, Self::Running(ActiveSession { paused: false, .. }))
    }

    /// Recipe being cooked.
    #[must_use]
    pub fn active_recipe_id(&self) -> Option<&str> {
        self.active().map(|a| a.recipe_id.as_str())
    }

    /// Current step index, 0 when idle.
    #[must_use]
    pub fn current_step_index(&self) -> usize {
        self.active().map_or(0, |a| a.step_index)
    }

    /// Seconds elapsed in the current step, 0 when idle.
    #[must_use]
    pub fn time_elapsed(&self) -> u64 {
        self.active().map_or(0, |a| a.elapsed)
    }

    /// Flat view with one field per session attribute.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            active_recipe_id: self.active_recipe_id().map(str::to_string),
            current_step_index: self.current_step_index(),
            time_elapsed: self.time_elapsed(),
            is_paused: self.is_paused(),
            is_active: self.is_active(),
        }
    }
}

/// Field-per-attribute snapshot of a [`Session`], used for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Recipe being cooked
    pub active_recipe_id: Option<String>,
    /// Current step index
    pub current_step_index: usize,
    /// Seconds elapsed in the current step
    pub time_elapsed: u64,
    /// Whether the countdown is paused
    pub is_paused: bool,
    /// Whether a session is in progress
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_view() {
        let view = Session::Idle.view();
        assert_eq!(
            view,
            SessionView {
                active_recipe_id: None,
                current_step_index: 0,
                time_elapsed: 0,
                is_paused: false,
                is_active: false,
            }
        );
    }

    #[test]
    fn test_started_view() {
        let session = Session::started("r1");
        let view = session.view();
        assert_eq!(view.active_recipe_id.as_deref(), Some("r1"));
        assert!(view.is_active);
        assert!(!view.is_paused);
        assert!(session.is_ticking());
    }

    #[test]
    fn test_view_json_field_names() {
        let value = serde_json::to_value(Session::started("r1").view()).unwrap();
        assert_eq!(value["activeRecipeId"], "r1");
        assert_eq!(value["currentStepIndex"], 0);
        assert_eq!(value["isActive"], true);
    }
}
