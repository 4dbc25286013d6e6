//! Session store: the only writer of the cooking session.
//!
//! All state changes go through six operations (start, pause, resume, tick,
//! advance-step, end). None of them can fail: calls that make no sense in the
//! current state are ignored, and a second `start` is refused with a warning.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info};

use super::state::Session;
use crate::notify::{Notification, NotificationSink};

/// Outcome of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A session began.
    Started,
    /// `start` was refused because a session is already running.
    Rejected,
    /// The countdown was paused.
    Paused,
    /// The countdown was resumed.
    Resumed,
    /// One second was counted; carries the new elapsed time.
    Ticked(u64),
    /// Moved on to the step with this index.
    Advanced(usize),
    /// The last step finished and the session is over.
    Completed,
    /// The session was stopped.
    Ended,
    /// Nothing changed.
    Ignored,
}

impl Transition {
    /// Whether the session state changed.
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Rejected | Self::Ignored)
    }
}

/// Owner of the session state.
pub struct SessionStore {
    session: Session,
    sink: Arc<dyn NotificationSink>,
    changes: watch::Sender<Session>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create an idle store reporting to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        let (changes, _) = watch::channel(Session::Idle);
        Self {
            session: Session::Idle,
            sink,
            changes,
        }
    }

    /// Current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Receive every state the store moves into.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.changes.subscribe()
    }

    fn publish(&self) {
        self.changes.send_replace(self.session.clone());
    }

    /// Begin cooking a recipe. Refused while another session runs.
    pub fn start(&mut self, recipe_id: &str) -> Transition {
        if let Some(active) = self.session.active() {
            debug!(active = %active.recipe_id, requested = recipe_id, "Session already active");
            self.sink
                .notify(Notification::warning("A cooking session is already active!"));
            return Transition::Rejected;
        }

        self.session = Session::started(recipe_id);
        info!(recipe = recipe_id, "Cooking session started");
        self.publish();
        self.sink.notify(Notification::success("Cooking session started!"));
        Transition::Started
    }

    /// Pause the countdown.
    pub fn pause(&mut self) -> Transition {
        let Session::Running(active) = &mut self.session else {
            return Transition::Ignored;
        };
        if active.paused {
            return Transition::Ignored;
        }

        active.paused = true;
        debug!(step = active.step_index, elapsed = active.elapsed, "Session paused");
        self.publish();
        self.sink.notify(Notification::info("Cooking paused"));
        Transition::Paused
    }

    /// Resume a paused countdown.
    pub fn resume(&mut self) -> Transition {
        let Session::Running(active) = &mut self.session else {
            return Transition::Ignored;
        };
        if !active.paused {
            return Transition::Ignored;
        }

        active.paused = false;
        debug!(step = active.step_index, elapsed = active.elapsed, "Session resumed");
        self.publish();
        self.sink.notify(Notification::info("Cooking resumed"));
        Transition::Resumed
    }

    /// Count one second of the current step.
    pub fn tick(&mut self) -> Transition {
        match &mut self.session {
            Session::Running(active) if !active.paused => {
                active.elapsed += 1;
                let elapsed = active.elapsed;
                self.publish();
                Transition::Ticked(elapsed)
            }
            _ => Transition::Ignored,
        }
    }

    /// Finish the current step of a recipe with `total_steps` steps.
    ///
    /// Moves to the next step, or ends the session after the last one.
    pub fn advance_step(&mut self, total_steps: usize) -> Transition {
        let Session::Running(active) = &mut self.session else {
            return Transition::Ignored;
        };

        if active.step_index + 1 < total_steps {
            active.step_index += 1;
            active.elapsed = 0;
            let step_index = active.step_index;
            info!(step = step_index, total_steps, "Step completed");
            self.publish();
            self.sink
                .notify(Notification::success("Step completed! Moving to next..."));
            Transition::Advanced(step_index)
        } else {
            info!(recipe = %active.recipe_id, "All steps complete");
            self.session = Session::Idle;
            self.publish();
            self.sink
                .notify(Notification::success("All steps complete! Great job!"));
            Transition::Completed
        }
    }

    /// Stop the session.
    pub fn end(&mut self) -> Transition {
        if !self.session.is_active() {
            return Transition::Ignored;
        }

        self.session = Session::Idle;
        info!("Cooking session ended");
        self.publish();
        self.sink.notify(Notification::info("Cooking session ended"));
        Transition::Ended
    }
}

/// Cloneable handle to one [`SessionStore`].
///
/// Every call locks the store for the duration of a single operation, so
/// handles held by different drivers never observe a half-applied transition.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionStore>>,
}

impl SharedSession {
    /// Wrap a new idle store.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionStore::new(sink))),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// Use this to make a read and a dependent transition atomic.
    pub fn with<R>(&self, f: impl FnOnce(&mut SessionStore) -> R) -> R {
        let mut store = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    /// Copy of the current session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.with(|store| store.session().clone())
    }

    /// See [`SessionStore::subscribe`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.with(|store| store.subscribe())
    }

    /// See [`SessionStore::start`].
    pub fn start(&self, recipe_id: &str) -> Transition {
        self.with(|store| store.start(recipe_id))
    }

    /// See [`SessionStore::pause`].
    pub fn pause(&self) -> Transition {
        self.with(SessionStore::pause)
    }

    /// See [`SessionStore::resume`].
    pub fn resume(&self) -> Transition {
        self.with(SessionStore::resume)
    }

    /// Pause if running, resume if paused.
    pub fn toggle_pause(&self) -> Transition {
        self.with(|store| {
            if store.session().is_paused() {
                store.resume()
            } else {
                store.pause()
            }
        })
    }

    /// See [`SessionStore::tick`].
    pub fn tick(&self) -> Transition {
        self.with(SessionStore::tick)
    }

    /// See [`SessionStore::advance_step`].
    pub fn advance_step(&self, total_steps: usize) -> Transition {
        self.with(|store| store.advance_step(total_steps))
    }

    /// See [`SessionStore::end`].
    pub fn end(&self) -> Transition {
        self.with(SessionStore::end)
    }
}
