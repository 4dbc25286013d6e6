//! Guided cooking sessions.
//!
//! - The session record and its store (start/pause/resume/tick/advance/end)
//! - Tick drivers that run the per-step countdown
//! - Progress figures for display

pub mod driver;
pub mod progress;
pub mod state;
pub mod store;

pub use driver::{advance_if_elapsed, fire, TickDriver, TICK_PERIOD};
pub use progress::{
    format_mmss, overall_progress, remaining_secs, render_progress_bar, step_progress, timeline,
    StepStatus,
};
pub use state::{ActiveSession, Session, SessionView};
pub use store::{SessionStore, SharedSession, Transition};
