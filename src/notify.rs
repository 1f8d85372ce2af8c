//! # Notifications
//!
//! Views report outcomes through a [`Notifier`] instead of touching any UI
//! toolkit directly. Notifications are fire-and-forget: nothing is returned
//! and nothing the view does depends on them.

use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

/// A single user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);

    fn success(&self, message: &str) {
        self.notify(Toast::new(ToastLevel::Success, message));
    }

    fn warning(&self, message: &str) {
        self.notify(Toast::new(ToastLevel::Warning, message));
    }

    fn error(&self, message: &str) {
        self.notify(Toast::new(ToastLevel::Error, message));
    }
}

/// Emits toasts as log events. Used by the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => info!(toast = %toast.message),
            ToastLevel::Warning => warn!(toast = %toast.message),
            ToastLevel::Error => error!(toast = %toast.message),
        }
    }
}

/// Keeps every toast in memory so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
