use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::modal_overlay::ModalOverlay;

#[component]
pub fn ModalConfirmDelete(
    #[props(default = "Delete meditation".to_string())] title: String,
    #[props(default = "Are you sure you want to delete this meditation? This action cannot be undone.".to_string())]
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] loading: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay { on_close,
            div { class: "modal-header",
                div {
                    p { class: "eyebrow", "Confirmation" }
                    h2 { class: "modal-title", "{title}" }
                }
                button {
                    class: "pill-button",
                    r#type: "button",
                    aria_label: "Close delete confirmation",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
            p { class: "modal-text", "{message}" }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: loading,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: loading,
                    onclick: move |_| on_confirm.call(()),
                    if loading { "Deleting..." } else { "{confirm_label}" }
                }
            }
        }
    }
}
