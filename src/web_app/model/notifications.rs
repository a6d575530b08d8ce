// web_app/model/notifications.rs - Ephemeral notification queue
//
// Toasts stack in insertion order and auto-dismiss after AUTO_DISMISS.
// The queue is generic over the timer handle type so the browser can store
// real timeout handles while tests use plain values. Each entry owns at most
// one armed timer; manual dismissal hands the handle back to be cancelled.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long a notification stays visible unless dismissed first
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Monotonically increasing identity of a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-500 text-white",
            NotificationKind::Error => "bg-red-500 text-white",
            NotificationKind::Info => "bg-blue-500 text-white",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug)]
pub struct NotificationQueue<H> {
    entries: Vec<Notification>,
    timers: HashMap<NotificationId, H>,
    next_id: u64,
}

impl<H> Default for NotificationQueue<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            timers: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<H> NotificationQueue<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its fresh id
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Attach the auto-dismiss timer for `id`.
    ///
    /// If the entry is already gone the handle is returned so the caller can
    /// cancel it instead of leaving it to fire later.
    pub fn arm(&mut self, id: NotificationId, handle: H) -> Option<H> {
        if self.contains(id) {
            self.timers.insert(id, handle)
        } else {
            Some(handle)
        }
    }

    /// Manual dismissal. Removes exactly `id` and returns its pending timer,
    /// which the caller must cancel.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<H> {
        self.entries.retain(|n| n.id != id);
        self.timers.remove(&id)
    }

    /// Timer callback. Returns whether an entry was actually removed.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.timers.remove(&id);
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Disarm every entry and hand back all pending timers for cancellation.
    /// Entries stay visible; only their timers are released.
    pub fn take_timers(&mut self) -> Vec<H> {
        self.timers.drain().map(|(_, handle)| handle).collect()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|n| n.id == id)
    }

    pub fn is_armed(&self, id: NotificationId) -> bool {
        self.timers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut queue = NotificationQueue::<()>::new();
        let a = queue.push("one", NotificationKind::Info);
        let b = queue.push("two", NotificationKind::Info);
        queue.dismiss(a);
        let c = queue.push("three", NotificationKind::Info);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_dismiss_returns_handle_for_cancellation() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("Saved", NotificationKind::Success);
        assert_eq!(queue.arm(id, 41), None);
        assert!(queue.is_armed(id));

        assert_eq!(queue.dismiss(id), Some(41));
        assert!(queue.is_empty());
        assert!(!queue.is_armed(id));
    }

    #[test]
    fn test_expire_after_dismiss_is_noop() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("gone", NotificationKind::Error);
        queue.arm(id, 1);
        queue.dismiss(id);

        let keep = queue.push("kept", NotificationKind::Info);
        assert!(!queue.expire(id));
        assert!(queue.contains(keep));
    }

    #[test]
    fn test_arm_unknown_id_hands_back_handle() {
        let mut queue = NotificationQueue::new();
        assert_eq!(queue.arm(NotificationId(99), 7), Some(7));
    }

    #[test]
    fn test_expire_removes_entry_and_timer() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("bye", NotificationKind::Info);
        queue.arm(id, ());
        assert!(queue.expire(id));
        assert!(!queue.is_armed(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_take_timers_returns_every_armed_handle() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("first", NotificationKind::Info);
        let b = queue.push("second", NotificationKind::Success);
        let c = queue.push("third", NotificationKind::Error);
        queue.arm(a, 10);
        queue.arm(c, 30);

        let mut handles = queue.take_timers();
        handles.sort();
        assert_eq!(handles, vec![10, 30]);
        assert!(!queue.is_armed(a));
        assert!(!queue.is_armed(b));
        assert!(!queue.is_armed(c));
        assert_eq!(queue.len(), 3);
        assert!(queue.take_timers().is_empty());
    }

    #[test]
    fn test_kind_css_classes() {
        assert!(NotificationKind::Success.css_class().contains("green"));
        assert!(NotificationKind::Error.css_class().contains("red"));
        assert!(NotificationKind::Info.css_class().contains("blue"));
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(NotificationId(3).to_string(), "notification-3");
    }
}
