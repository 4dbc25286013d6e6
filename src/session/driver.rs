//! Tick drivers: periodic tasks that keep a session's clock moving.
//!
//! Every UI surface that shows the session mounts its own driver. A driver
//! ticks only while the session is active and unpaused; it drops its timer as
//! soon as that stops being true and re-arms when it becomes true again.
//!
//! Several drivers may be mounted at once. The step-completion check runs in
//! the same critical section as the advance it triggers, so two drivers that
//! both saw the threshold cross still move the session forward only once.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

use super::state::Session;
use super::store::{SharedSession, Transition};
use crate::recipes::{Recipe, RecipeCatalog};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Advance the session if the current step of `recipe` has run its course.
///
/// The session is re-read under the store lock, so the decision always uses
/// the latest state. Ends the session if its step index no longer exists in
/// the recipe.
pub fn advance_if_elapsed(session: &SharedSession, recipe: &Recipe) -> Transition {
    session.with(|store| {
        let Some(active) = store.session().active() else {
            return Transition::Ignored;
        };
        if active.recipe_id != recipe.id {
            return Transition::Ignored;
        }

        match recipe.step(active.step_index) {
            Some(step) if active.elapsed >= step.duration_secs() => {
                store.advance_step(recipe.step_count())
            }
            Some(_) => Transition::Ignored,
            None => {
                warn!(
                    recipe = %recipe.id,
                    step = active.step_index,
                    "Step no longer exists, ending session"
                );
                store.end()
            }
        }
    })
}

/// One driver firing: count a second, then check for step completion.
///
/// A zero-length current step is checked without counting a second first.
/// Returns the most significant transition that happened.
pub fn fire(session: &SharedSession, catalog: &dyn RecipeCatalog) -> Transition {
    let snapshot = session.snapshot();
    if !snapshot.is_ticking() {
        return Transition::Ignored;
    }
    let Some(recipe_id) = snapshot.active_recipe_id() else {
        return Transition::Ignored;
    };

    let Some(recipe) = catalog.get(recipe_id) else {
        warn!(recipe = %recipe_id, "Recipe not found, ending session");
        return session.end();
    };

    if recipe
        .step(snapshot.current_step_index())
        .is_some_and(|step| step.duration_secs() == 0)
    {
        return advance_if_elapsed(session, &recipe);
    }

    let ticked = session.tick();
    if ticked == Transition::Ignored {
        return ticked;
    }

    match advance_if_elapsed(session, &recipe) {
        Transition::Ignored => ticked,
        transition => transition,
    }
}

/// A mounted tick driver.
///
/// Dropping the driver unmounts it and stops its task.
#[derive(Debug)]
pub struct TickDriver {
    name: String,
    task: JoinHandle<()>,
}

impl TickDriver {
    /// Spawn a driver on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn mount(
        name: impl Into<String>,
        session: SharedSession,
        catalog: Arc<dyn RecipeCatalog>,
        period: Duration,
    ) -> Self {
        let name = name.into();
        debug!(driver = %name, ?period, "Mounting tick driver");
        let task = tokio::spawn(run(name.clone(), session, catalog, period));
        Self { name, task }
    }

    /// Driver name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the driver task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the driver.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.task.abort();
        debug!(driver = %self.name, "Unmounted tick driver");
    }
}

/// Wait until the session is ticking. Returns false if the store went away.
async fn wait_until_ticking(changes: &mut watch::Receiver<Session>) -> bool {
    loop {
        if changes.borrow_and_update().is_ticking() {
            return true;
        }
        if changes.changed().await.is_err() {
            return false;
        }
    }
}

async fn run(
    name: String,
    session: SharedSession,
    catalog: Arc<dyn RecipeCatalog>,
    period: Duration,
) {
    let mut changes = session.subscribe();

    loop {
        if !wait_until_ticking(&mut changes).await {
            return;
        }

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(driver = %name, "Timer armed");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let transition = fire(&session, catalog.as_ref());
                    trace!(driver = %name, ?transition, "Tick");
                }
                changed = changes.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    if !changes.borrow_and_update().is_ticking() {
                        debug!(driver = %name, "Timer cancelled");
                        break;
                    }
                }
            }
        }
    }
}
