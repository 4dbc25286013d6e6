//! User-facing notifications.
//!
//! Session transitions report what happened through a [`NotificationSink`].
//! Delivery is fire-and-forget: nothing is returned and nothing is retried.

use std::sync::{Mutex, PoisonError};

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Neutral status change
    Info,
    /// Something finished well
    Success,
    /// The request was refused
    Warning,
}

impl Level {
    /// Icon shown next to the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✔",
            Self::Warning => "⚠",
        }
    }
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity
    pub level: Level,
    /// Message text
    pub message: String,
}

impl Notification {
    /// Informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    /// Success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    /// Warning message.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    /// Colored single-line rendering for the terminal.
    #[must_use]
    pub fn render(&self) -> String {
        let text = format!("{} {}", self.level.icon(), self.message);
        match self.level {
            Level::Info => text.cyan().to_string(),
            Level::Success => text.green().to_string(),
            Level::Warning => text.yellow().to_string(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.level.icon(), self.message)
    }
}

/// Receives notifications.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    /// Deliver a notification.
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Warning => tracing::warn!(message = %notification.message, "notification"),
            Level::Info | Level::Success => {
                tracing::info!(message = %notification.message, "notification");
            }
        }
    }
}

/// Prints notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", notification.render());
    }
}

/// Discards notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl NotificationSink for Silent {
    fn notify(&self, _notification: Notification) {}
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    received: Mutex<Vec<Notification>>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything received so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.received.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// The most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NotificationSink for Recorder {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
