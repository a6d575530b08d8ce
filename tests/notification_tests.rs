// Notification queue tests
// The queue is generic over the timer handle, so these tests arm entries
// with plain integers standing in for browser timeout handles.

use hrgptai_site::web_app::model::notifications::AUTO_DISMISS;
use hrgptai_site::web_app::model::{NotificationKind, NotificationQueue};
use std::time::Duration;

#[test]
fn test_auto_dismiss_delay() {
    assert_eq!(AUTO_DISMISS, Duration::from_secs(5));
}

#[test]
fn test_three_rapid_notifications_stack_in_order() {
    let mut queue = NotificationQueue::new();
    let first = queue.push("Search functionality coming soon!", NotificationKind::Info);
    let second = queue.push("Message sent", NotificationKind::Success);
    let third = queue.push("Something went wrong", NotificationKind::Error);
    queue.arm(first, 1);
    queue.arm(second, 2);
    queue.arm(third, 3);

    let messages: Vec<&str> = queue.entries().iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["Search functionality coming soon!", "Message sent", "Something went wrong"]
    );
}

#[test]
fn test_dismissing_middle_keeps_others_armed() {
    let mut queue = NotificationQueue::new();
    let first = queue.push("first", NotificationKind::Info);
    let second = queue.push("second", NotificationKind::Info);
    let third = queue.push("third", NotificationKind::Info);
    for (id, handle) in [(first, 10), (second, 20), (third, 30)] {
        assert_eq!(queue.arm(id, handle), None);
    }

    // The dismissed entry's own timer comes back for cancellation
    assert_eq!(queue.dismiss(second), Some(20));

    let remaining: Vec<_> = queue.entries().iter().map(|n| (n.id, n.message.clone())).collect();
    assert_eq!(
        remaining,
        vec![(first, "first".to_string()), (third, "third".to_string())]
    );
    assert!(queue.is_armed(first));
    assert!(queue.is_armed(third));
    assert!(!queue.is_armed(second));

    // The others still expire on their own schedule
    assert!(queue.expire(first));
    assert!(queue.expire(third));
    assert!(queue.is_empty());
}

#[test]
fn test_late_timer_does_not_touch_newer_entries() {
    let mut queue = NotificationQueue::new();
    let old = queue.push("old", NotificationKind::Info);
    queue.arm(old, 1);
    queue.dismiss(old);

    let fresh = queue.push("fresh", NotificationKind::Info);
    queue.arm(fresh, 2);

    // The cancelled timer firing anyway is a no-op
    assert!(!queue.expire(old));
    assert_eq!(queue.len(), 1);
    assert!(queue.contains(fresh));
    assert!(queue.is_armed(fresh));
}

#[test]
fn test_rearming_returns_previous_handle() {
    let mut queue = NotificationQueue::new();
    let id = queue.push("retry", NotificationKind::Info);
    assert_eq!(queue.arm(id, 1), None);
    assert_eq!(queue.arm(id, 2), Some(1));
    assert_eq!(queue.dismiss(id), Some(2));
}

#[test]
fn test_notification_serializes() {
    let mut queue = NotificationQueue::<()>::new();
    queue.push("Saved", NotificationKind::Success);
    let json = serde_json::to_value(&queue.entries()[0]).unwrap();
    assert_eq!(json["message"], "Saved");
    assert_eq!(json["kind"], "Success");
    assert_eq!(json["id"], 1);
}
