//! simmer - a terminal recipe manager with guided cooking sessions
//!
//! This crate keeps a catalog of recipes and runs cooking sessions: a
//! single-session state machine whose per-step countdown is driven by
//! periodic tick drivers.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod recipes;
pub mod session;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::SimmerError;
pub use recipes::{JsonCatalog, Recipe, RecipeCatalog};
pub use session::{Session, SessionStore, SharedSession, TickDriver};
