use dioxus::prelude::*;

use crate::hooks::use_body_scroll_lock;

/// A full-screen overlay that centers its children in a modal card.
///
/// Clicking the backdrop or pressing Escape triggers `on_close` unless
/// `dismissable` is false. Body scrolling is locked while it is mounted.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = true)] dismissable: bool,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    use_body_scroll_lock();

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onmounted: move |evt| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("Could not focus modal: {e:?}");
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape && dismissable {
                    on_close.call(());
                }
            },
            onclick: move |_| {
                if dismissable {
                    on_close.call(());
                }
            },
            div {
                class: if wide { "modal-card modal-card-wide" } else { "modal-card" },
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Eyebrow, title and close button shared by every modal.
#[component]
pub fn ModalHeader(
    title: String,
    eyebrow: Option<String>,
    on_close: EventHandler<()>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "modal-header",
            div {
                if let Some(eyebrow) = eyebrow {
                    p { class: "eyebrow", "{eyebrow}" }
                }
                h2 { class: "modal-title", "{title}" }
            }
            button {
                class: "modal-close",
                r#type: "button",
                aria_label: "Close",
                disabled,
                onclick: move |_| on_close.call(()),
                "×"
            }
        }
    }
}
