//! Notifier port: transient, user-visible failure notifications.

use std::time::Duration;

/// Shows a short-lived message (a toast) to the user.
pub trait Notifier {
    /// Display `message` for roughly `timeout`.
    fn notify(&self, message: &str, timeout: Duration);
}
