//! Notification boundary.
//!
//! The cart never talks to a concrete toast system; it hands a
//! [`Notification`] to an injected [`Notifier`]. This keeps the ledger
//! testable without a rendering environment.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// A shopper-facing notification: title plus one line of detail.
///
/// Rendering is the presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    /// Creates a notification from a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The injected notification collaborator.
///
/// Invoked synchronously from within cart operations; implementations must
/// not block or fail.
pub trait Notifier {
    /// Delivers one notification.
    fn notify(&self, notification: Notification);
}

/// Discards every notification. The default collaborator when the embedder
/// wires no notification surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Captures notifications in memory, in delivery order.
///
/// A test double analogous to an in-memory store: same interface as a real
/// notification surface, inspectable afterwards. Single-threaded, like the
/// sessions that own it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification delivered so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }

    /// Returns the most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.sent.borrow().last().cloned()
    }

    /// Returns the number of notifications delivered.
    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }

    /// Clears the recorded notifications.
    pub fn clear(&self) {
        self.sent.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_notifier_discards() {
        let notifier = NullNotifier;
        notifier.notify(Notification::new("a", "b"));
        // Nothing observable; this is the contract.
    }

    #[test]
    fn recording_notifier_keeps_delivery_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::new("first", "1"));
        notifier.notify(Notification::new("second", "2"));

        assert_eq!(notifier.count(), 2);
        assert_eq!(notifier.notifications()[0].title, "first");
        assert_eq!(notifier.last().unwrap().title, "second");

        notifier.clear();
        assert_eq!(notifier.count(), 0);
        assert!(notifier.last().is_none());
    }
}
