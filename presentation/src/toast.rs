//! Transient toast notifications.
//!
//! A toast stays visible for a fixed display duration, then plays a short
//! exit animation before it is removed. [`ToastQueue`] models that
//! lifetime; [`ConsoleNotifier`] is the console sink implementing the
//! application's [`Notifier`] port. When no notifier is attached to the
//! controller, notifications are dropped by the `NoNotifier` null object
//! instead.

use colored::Colorize;
use kb_application::{Notifier, Severity};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const TOAST_DISPLAY: Duration = Duration::from_secs(3);

/// Exit animation time before the toast is removed.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

/// One queued notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    raised_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            raised_at: Instant::now(),
        }
    }

    /// True once display duration plus exit animation have both passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= TOAST_DISPLAY + TOAST_EXIT
    }
}

/// Active toasts, oldest first. Expired entries are purged on access.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, message: impl Into<String>, severity: Severity) {
        self.toasts
            .lock()
            .unwrap()
            .push(Toast::new(message, severity));
    }

    /// Toasts still visible at `now`.
    pub fn active(&self, now: Instant) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap();
        toasts.retain(|t| !t.is_expired(now));
        toasts.clone()
    }
}

/// Console sink for notifications: prints a styled line per toast and
/// records it in a queue for surfaces that re-render.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    queue: ToastQueue,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    fn styled(message: &str, severity: Severity) -> String {
        match severity {
            Severity::Error => format!("{} {}", "!".red().bold(), message.red()),
            Severity::Warning => format!("{} {}", "!".yellow().bold(), message.yellow()),
            Severity::Success => message.dimmed().to_string(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        eprintln!("{}", Self::styled(message, severity));
        self.queue.push(message, severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_display_plus_exit() {
        let toast = Toast::new("saved", Severity::Success);
        let raised = toast.raised_at;
        assert!(!toast.is_expired(raised));
        assert!(!toast.is_expired(raised + TOAST_DISPLAY));
        assert!(!toast.is_expired(raised + TOAST_DISPLAY + TOAST_EXIT - Duration::from_millis(1)));
        assert!(toast.is_expired(raised + TOAST_DISPLAY + TOAST_EXIT));
    }

    #[test]
    fn queue_purges_expired_toasts() {
        let queue = ToastQueue::new();
        queue.push("first", Severity::Success);
        queue.push("second", Severity::Error);

        let now = Instant::now();
        assert_eq!(queue.active(now).len(), 2);

        let later = now + TOAST_DISPLAY + TOAST_EXIT + Duration::from_millis(1);
        assert!(queue.active(later).is_empty());
    }
}
