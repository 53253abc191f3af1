//! Transient notifications.
//!
//! [`ToastProvider`] owns the list and renders it; anything below it calls
//! [`use_toast`] and pushes messages. Each toast schedules its own removal,
//! so a toast raised by a modal outlives the modal that raised it.

use std::time::Duration;

use dioxus::prelude::*;

use crate::platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastOptions {
    pub duration: Duration,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(3),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    message: String,
    variant: ToastVariant,
    duration: Duration,
}

/// Handle returned by [`use_toast`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(message, ToastVariant::Success, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(message, ToastVariant::Error, options);
    }

    fn push(&self, message: String, variant: ToastVariant, options: ToastOptions) {
        let mut next_id = self.next_id;
        let mut items = self.items;
        let id = next_id();
        next_id.set(id + 1);
        items.write().push(Toast {
            id,
            message,
            variant,
            duration: options.duration,
        });
    }

    fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|t| t.id != id);
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<Toast>::new);
    let next_id = use_signal(|| 0u64);
    let toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div { class: "toast-stack", role: "status", aria_live: "polite",
            for toast in items() {
                ToastItem { key: "{toast.id}", toast, toasts }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: Toasts) -> Element {
    let id = toast.id;
    let duration = toast.duration;
    use_future(move || async move {
        platform::sleep(duration).await;
        toasts.dismiss(id);
    });

    let class = match toast.variant {
        ToastVariant::Success => "toast toast-success",
        ToastVariant::Error => "toast toast-error",
    };

    rsx! {
        div { class,
            span { "{toast.message}" }
            button {
                class: "toast-close",
                r#type: "button",
                aria_label: "Dismiss",
                onclick: move |_| toasts.dismiss(id),
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duration_is_three_seconds() {
        assert_eq!(ToastOptions::new().duration, Duration::from_secs(3));
        let custom = ToastOptions::new().duration(Duration::from_millis(500));
        assert_eq!(custom.duration, Duration::from_millis(500));
    }
}
