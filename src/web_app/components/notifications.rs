// web_app/components/notifications.rs - Toast notifications
//
// NotificationCenter is shared through Leptos context by the public layout.
// It wraps the notification queue in a signal and owns the browser timers
// that auto-dismiss each entry.

use leptos::prelude::*;

use crate::web_app::model::notifications::AUTO_DISMISS;
use crate::web_app::model::{Notification, NotificationId, NotificationKind, NotificationQueue};

/// Handle to the page-wide notification queue
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    queue: RwSignal<NotificationQueue<TimeoutHandle>>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Show a notification and schedule its auto-dismissal.
    ///
    /// Returns `None` if the owning view has already been disposed.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> Option<NotificationId> {
        let queue = self.queue;
        let message = message.into();
        tracing::info!("Notification ({:?}): {}", kind, message);

        let id = queue.try_update(|q| q.push(message, kind))?;

        let expire = move || {
            if queue.try_update(|q| q.expire(id)) == Some(true) {
                tracing::debug!("Expired {}", id);
            }
        };
        match set_timeout_with_handle(expire, AUTO_DISMISS) {
            Ok(handle) => {
                if let Some(stale) = queue.try_update(|q| q.arm(id, handle)).flatten() {
                    stale.clear();
                }
            }
            Err(err) => tracing::warn!("Could not schedule auto-dismiss for {}: {:?}", id, err),
        }

        Some(id)
    }

    /// Remove one notification now and cancel its pending timer
    pub fn dismiss(&self, id: NotificationId) {
        if let Some(handle) = self.queue.try_update(|q| q.dismiss(id)).flatten() {
            handle.clear();
        }
        tracing::debug!("Dismissed {}", id);
    }

    /// Cancel every pending auto-dismiss timer. Returns how many were armed.
    pub fn cancel_timers(&self) -> usize {
        let handles = self.queue.try_update(|q| q.take_timers()).unwrap_or_default();
        let count = handles.len();
        handles.into_iter().for_each(|handle| handle.clear());
        if count > 0 {
            tracing::debug!("Cancelled {} notification timer(s)", count);
        }
        count
    }

    /// Visible notifications, oldest first
    pub fn entries(&self) -> Vec<Notification> {
        self.queue.with(|q| q.entries().to_vec())
    }
}

/// Create a NotificationCenter and provide it to the current owner's subtree.
///
/// Pending auto-dismiss timers are cancelled when that owner is cleaned up.
pub fn provide_notification_center() -> NotificationCenter {
    let center = NotificationCenter::new();
    provide_context(center);
    on_cleanup(move || {
        center.cancel_timers();
    });
    center
}

/// The nearest NotificationCenter, or a fresh one if none was provided
pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().unwrap_or_else(provide_notification_center)
}

/// Fixed top-right stack of visible notifications
#[component]
pub fn NotificationStack() -> impl IntoView {
    let center = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2" aria-live="polite">
            <For
                each=move || center.entries()
                key=|notification| notification.id
                children=move |notification: Notification| {
                    let id = notification.id;
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "p-4 rounded-lg shadow-lg max-w-sm fade-in {}",
                                notification.kind.css_class(),
                            )
                        >
                            <div class="flex justify-between items-start">
                                <p class="text-sm font-medium">{notification.message}</p>
                                <button
                                    type="button"
                                    aria-label="Dismiss notification"
                                    class="ml-4 text-white hover:text-gray-200 transition-colors"
                                    on:click=move |_| center.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
