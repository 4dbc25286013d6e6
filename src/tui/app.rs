//! Application state for the TUI.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::cli::commands::Context;
use crate::config::CookingConfig;
use crate::error::SimmerError;
use crate::notify::{LogSink, Notification, NotificationSink};
use crate::recipes::{Difficulty, JsonCatalog, Recipe, RecipeCatalog, RecipeQuery};
use crate::session::{Session, SharedSession, TickDriver, Transition};
use crate::tui::toast::Toasts;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Browsable recipe list, with the mini-player while a session runs.
    Recipes,
    /// One recipe with its cooking controls.
    Session,
}

/// Application state.
pub struct App {
    catalog: Arc<JsonCatalog>,
    session: SharedSession,
    toasts: Arc<Toasts>,
    cooking: CookingConfig,
    driver: Option<TickDriver>,
    /// All recipes, in storage order.
    pub recipes: Vec<Recipe>,
    /// Active filter and sort.
    pub query: RecipeQuery,
    /// Index into the filtered list.
    pub selected: usize,
    /// Current screen.
    pub screen: Screen,
    /// Recipe open on the session screen.
    pub viewing: Option<String>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app on the recipe list.
    ///
    /// Must be called inside a Tokio runtime, which hosts the tick drivers.
    #[must_use]
    pub fn new(ctx: &Context) -> Self {
        let toasts = Arc::new(Toasts::new());
        let sink: Arc<dyn NotificationSink> = if ctx.config.cooking.notifications {
            toasts.clone()
        } else {
            Arc::new(LogSink)
        };

        let mut app = Self {
            catalog: ctx.catalog.clone(),
            session: SharedSession::new(sink),
            toasts,
            cooking: ctx.config.cooking.clone(),
            driver: None,
            recipes: ctx.catalog.list(),
            query: RecipeQuery::default(),
            selected: 0,
            screen: Screen::Recipes,
            viewing: None,
            status: None,
            should_quit: false,
        };
        app.remount();
        app
    }

    /// Copy of the session state.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    /// Whether the list shows the mini-player for `session`.
    #[must_use]
    pub const fn mini_player_visible(&self, session: &Session) -> bool {
        self.cooking.mini_player && session.is_active()
    }

    /// Name of the mounted tick driver, if any.
    #[must_use]
    pub fn driver_name(&self) -> Option<&str> {
        self.driver.as_ref().map(TickDriver::name)
    }

    /// Toast to show now, if any.
    #[must_use]
    pub fn toast(&self) -> Option<Notification> {
        self.toasts.current(Instant::now())
    }

    /// Recipes after filtering and sorting.
    #[must_use]
    pub fn visible(&self) -> Vec<&Recipe> {
        self.query.apply(&self.recipes)
    }

    /// The highlighted recipe on the list.
    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.visible().get(self.selected).copied()
    }

    /// The recipe open on the session screen.
    #[must_use]
    pub fn viewing_recipe(&self) -> Option<&Recipe> {
        let id = self.viewing.as_deref()?;
        self.recipes.iter().find(|r| r.id == id)
    }

    /// The recipe the running session is cooking.
    #[must_use]
    pub fn active_recipe(&self) -> Option<&Recipe> {
        let session = self.session();
        let id = session.active_recipe_id()?;
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Reload recipes from the catalog.
    pub fn refresh(&mut self) {
        self.recipes = self.catalog.list();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    /// Cycle the difficulty filter: all, easy, medium, hard, all.
    pub fn cycle_difficulty(&mut self) {
        let next = match self.query.difficulties.as_slice() {
            [] => Some(Difficulty::Easy),
            [Difficulty::Easy] => Some(Difficulty::Medium),
            [Difficulty::Medium] => Some(Difficulty::Hard),
            _ => None,
        };
        self.query.difficulties = next.into_iter().collect();
        self.selected = 0;
        self.status = Some(format!("Filter: {}", self.filter_label()));
    }

    /// Human-readable difficulty filter.
    #[must_use]
    pub fn filter_label(&self) -> String {
        if self.query.difficulties.is_empty() {
            "all".to_string()
        } else {
            self.query
                .difficulties
                .iter()
                .map(|d| d.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    /// Flip the sort direction.
    pub fn toggle_sort(&mut self) {
        self.query.sort = self.query.sort.reversed();
        self.selected = 0;
    }

    /// Open the highlighted recipe on the session screen.
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_recipe().map(|r| r.id.clone()) {
            self.open(id);
        }
    }

    fn open(&mut self, id: String) {
        debug!(recipe = %id, "Opening session screen");
        self.viewing = Some(id);
        self.screen = Screen::Session;
        self.remount();
    }

    /// Go back to the recipe list.
    pub fn back(&mut self) {
        self.screen = Screen::Recipes;
        self.viewing = None;
        self.refresh();
        self.remount();
    }

    /// Start cooking `id` and show it.
    ///
    /// If another session is already running the store refuses and the
    /// running recipe is shown instead.
    pub fn start_cooking(&mut self, id: &str) {
        let shown = match self.session.start(id) {
            Transition::Rejected => self
                .session()
                .active_recipe_id()
                .map_or_else(|| id.to_string(), str::to_string),
            _ => id.to_string(),
        };
        self.open(shown);
    }

    /// Start cooking the highlighted recipe.
    pub fn cook_selected(&mut self) {
        if let Some(id) = self.selected_recipe().map(|r| r.id.clone()) {
            self.start_cooking(&id);
        }
    }

    /// Start cooking the recipe on the session screen.
    pub fn cook_viewing(&mut self) {
        if let Some(id) = self.viewing.clone() {
            self.start_cooking(&id);
        }
    }

    /// Pause or resume the running session.
    pub fn toggle_pause(&self) {
        self.session.toggle_pause();
    }

    /// Finish the current step by hand.
    pub fn next_step(&self) {
        if let Some(total) = self.active_recipe().map(Recipe::step_count) {
            self.session.advance_step(total);
        }
    }

    /// Stop the running session.
    pub fn stop(&self) {
        self.session.end();
    }

    /// Flip the favorite flag of the recipe in focus.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be written.
    pub fn toggle_favorite(&mut self) -> Result<(), SimmerError> {
        let id = match self.screen {
            Screen::Recipes => self.selected_recipe().map(|r| r.id.clone()),
            Screen::Session => self.viewing.clone(),
        };
        let Some(id) = id else {
            return Ok(());
        };

        if let Some(favorite) = self.catalog.toggle_favorite(&id)? {
            self.status = Some(if favorite {
                "Added to favorites".to_string()
            } else {
                "Removed from favorites".to_string()
            });
        }
        self.refresh();
        Ok(())
    }

    /// Mount the tick driver for the screen on display.
    ///
    /// The list mounts the mini-player's driver (when enabled), the session
    /// screen mounts its own. Only one surface is on screen at a time.
    fn remount(&mut self) {
        let name = match self.screen {
            Screen::Recipes if self.cooking.mini_player => Some("mini-player"),
            Screen::Recipes => None,
            Screen::Session => Some("session-view"),
        };

        if self.driver_name() == name {
            return;
        }
        self.driver = None;
        self.driver = name.map(|name| {
            let catalog: Arc<dyn RecipeCatalog> = self.catalog.clone();
            TickDriver::mount(
                name,
                self.session.clone(),
                catalog,
                self.cooking.tick_period(),
            )
        });
    }
}
