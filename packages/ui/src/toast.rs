//! Toast notifications.
//!
//! [`ToastNotifier`] is the UI side of [`gate::Notifier`]: every message the
//! login workflow emits becomes a toast in the shared [`ToastQueue`], which
//! [`ToastHost`] renders.

use std::time::Duration;

use dioxus::prelude::*;
use gate::Severity;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: &str, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            message: message.to_string(),
            severity,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Shows gate notifications as toasts that close after `auto_close_ms`.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Signal<ToastQueue>,
    auto_close_ms: u32,
}

impl ToastNotifier {
    pub fn new(toasts: Signal<ToastQueue>, auto_close_ms: u32) -> Self {
        Self {
            toasts,
            auto_close_ms,
        }
    }
}

impl gate::Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(message, severity);

        if self.auto_close_ms == 0 {
            return;
        }
        let delay = Duration::from_millis(u64::from(self.auto_close_ms));
        // Owned by the root scope: the sender may unmount before the toast closes.
        spawn_forever(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(delay).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(delay).await;

            toasts.write().dismiss(id);
        });
    }
}

/// Renders the toast queue in the top-right corner.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-full max-w-xs",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    role: "alert",
                    class: match toast.severity {
                        Severity::Error => "flex items-start gap-2 px-4 py-3 rounded-md shadow bg-red-50 border border-red-200 text-red-700 text-sm",
                        Severity::Success => "flex items-start gap-2 px-4 py-3 rounded-md shadow bg-green-50 border border-green-200 text-green-700 text-sm",
                    },
                    span { class: "flex-1", "{toast.message}" }
                    button {
                        class: "text-current opacity-60 hover:opacity-100",
                        aria_label: "Dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
