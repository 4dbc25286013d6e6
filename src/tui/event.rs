//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::error::SimmerError;
use crate::tui::app::{App, Screen};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle the favorite flag of the recipe in focus.
    Favorite,
}

/// Help line for the recipe list.
pub const RECIPES_HELP: &str =
    "j/k:nav | Enter:open | c:cook | f:favorite | d:difficulty | s:sort | space:pause | x:stop | q:quit";

/// Help line for the session screen.
pub const SESSION_HELP: &str =
    "c:start | space:pause/resume | n:next step | x:stop | f:favorite | Esc:back";

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, SimmerError> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))
        .map_err(|e| SimmerError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| SimmerError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(handle_key(app, key));
        }
    }

    Ok(None)
}

/// Apply one key press.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match (app.screen, key.code) {
        (_, KeyCode::Char('f')) => return Some(Action::Favorite),
        (_, KeyCode::Char(' ')) => app.toggle_pause(),
        (_, KeyCode::Char('x')) => app.stop(),

        (Screen::Recipes, KeyCode::Char('q')) => return Some(Action::Quit),
        (Screen::Recipes, KeyCode::Char('j') | KeyCode::Down) => app.select_next(),
        (Screen::Recipes, KeyCode::Char('k') | KeyCode::Up) => app.select_previous(),
        (Screen::Recipes, KeyCode::Enter) => app.open_selected(),
        (Screen::Recipes, KeyCode::Char('c')) => app.cook_selected(),
        (Screen::Recipes, KeyCode::Char('d')) => app.cycle_difficulty(),
        (Screen::Recipes, KeyCode::Char('s')) => app.toggle_sort(),
        (Screen::Recipes, KeyCode::Char('?')) => app.status = Some(RECIPES_HELP.to_string()),

        (Screen::Session, KeyCode::Esc | KeyCode::Char('q')) => app.back(),
        (Screen::Session, KeyCode::Char('c')) => app.cook_viewing(),
        (Screen::Session, KeyCode::Char('n')) => app.next_step(),
        (Screen::Session, KeyCode::Char('?')) => app.status = Some(SESSION_HELP.to_string()),

        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::cli::commands::Context;
    use crate::recipes::types::fixtures::recipe_with_durations;
    use crate::recipes::RecipeCatalog;
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) -> Option<Action> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app(dir: &TempDir) -> App {
        let ctx = Context::with_root(dir.path().to_path_buf(), OutputFormat::Pretty);
        ctx.catalog.create(recipe_with_durations("r1", &[1, 1])).unwrap();
        App::new(&ctx)
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[tokio::test]
    async fn test_cook_flow_keys() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.screen, Screen::Session);
        assert!(app.session().is_active());

        press(&mut app, KeyCode::Char(' '));
        assert!(app.session().is_paused());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session().current_step_index(), 1);

        // q leaves the session screen instead of quitting
        assert_eq!(press(&mut app, KeyCode::Char('q')), None);
        assert_eq!(app.screen, Screen::Recipes);

        press(&mut app, KeyCode::Char('x'));
        assert!(!app.session().is_active());
    }

    #[tokio::test]
    async fn test_favorite_is_an_action() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir);
        assert_eq!(press(&mut app, KeyCode::Char('f')), Some(Action::Favorite));
    }
}
