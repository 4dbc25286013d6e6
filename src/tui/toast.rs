//! Toast queue: session notifications shown one at a time in the status bar.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::notify::{Notification, NotificationSink};

/// How long each toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug)]
struct Toast {
    notification: Notification,
    shown_at: Option<Instant>,
}

/// Queue of pending toasts.
#[derive(Debug, Default)]
pub struct Toasts {
    queue: Mutex<VecDeque<Toast>>,
}

impl Toasts {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The toast to show at `now`, dropping ones that have had their time.
    pub fn current(&self, now: Instant) -> Option<Notification> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);

        while let Some(front) = queue.front_mut() {
            match front.shown_at {
                Some(at) if now.saturating_duration_since(at) >= TOAST_TTL => {
                    queue.pop_front();
                }
                Some(_) => return Some(front.notification.clone()),
                None => {
                    front.shown_at = Some(now);
                    return Some(front.notification.clone());
                }
            }
        }
        None
    }

    /// Number of toasts waiting or on screen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for Toasts {
    fn notify(&self, notification: Notification) {
        tracing::debug!(message = %notification.message, "Toast queued");
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Toast {
                notification,
                shown_at: None,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_show_in_order_and_expire() {
        let toasts = Toasts::new();
        toasts.notify(Notification::info("Cooking session started!"));
        toasts.notify(Notification::info("Cooking paused"));

        let start = Instant::now();
        assert_eq!(
            toasts.current(start).unwrap().message,
            "Cooking session started!"
        );
        assert_eq!(
            toasts.current(start + Duration::from_secs(1)).unwrap().message,
            "Cooking session started!"
        );

        let later = start + TOAST_TTL;
        assert_eq!(toasts.current(later).unwrap().message, "Cooking paused");
        assert!(toasts.current(later + TOAST_TTL).is_none());
        assert!(toasts.is_empty());
    }
}
