//! Toast notifications, rendered top-center and dismissed automatically.

use dioxus::prelude::*;
use topicboard_core::config::TOAST_AUTO_CLOSE_MS;
use topicboard_core::notification::{Notification, Severity};

use crate::platform::sleep_ms;

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Handle for raising toasts from any component or task.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Notifier {
    /// Must be called inside a component; the toasts live in its scope.
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn show(mut self, notification: Notification) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, notification });
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(Notification::success(message));
    }

    pub fn info(self, message: impl Into<String>) {
        self.show(Notification::info(message));
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(Notification::error(message));
    }

    fn dismiss(mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Renders the active toasts.
#[component]
pub fn ToastHost() -> Element {
    let notifier = use_notifier();
    let toasts = notifier.toasts.read().clone();

    rsx! {
        div { class: "tb-toast-host", role: "status",
            for toast in toasts {
                ToastItem {
                    key: "{toast.id}",
                    toast,
                    on_dismiss: move |id| notifier.dismiss(id),
                }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;

    // Owned by this toast, so the timer goes away with it
    use_future(move || async move {
        sleep_ms(TOAST_AUTO_CLOSE_MS).await;
        on_dismiss.call(id);
    });

    let severity = toast.notification.severity;
    let icon = match severity {
        Severity::Success => "\u{2713}",
        Severity::Info => "\u{2139}",
        Severity::Error => "\u{26A0}",
    };
    let class = format!("tb-toast tb-toast--{}", severity.as_str());
    let message = toast.notification.message.clone();

    rsx! {
        div { class: "{class}",
            span { class: "tb-toast-icon", "{icon}" }
            span { class: "tb-toast-message", "{message}" }
            button {
                class: "tb-toast-close",
                "aria-label": "Dismiss",
                onclick: move |_| on_dismiss.call(id),
                "\u{2715}"
            }
        }
    }
}
