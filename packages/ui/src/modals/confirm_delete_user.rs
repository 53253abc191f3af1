use dioxus::prelude::*;
use store::AdminUser;

use crate::components::{Button, ButtonVariant};
use crate::modal_overlay::ModalOverlay;

/// Confirm deletion of `user`. `on_confirm` receives `Some(keep)` when the
/// user owns public meditations and `None` otherwise.
#[component]
pub fn ModalConfirmDeleteUser(
    user: AdminUser,
    #[props(default)] loading: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<Option<bool>>,
) -> Element {
    let mut keep_public = use_signal(|| false);
    let has_public = user.has_public_mantras;
    let title = format!("Delete {}", user.email);

    rsx! {
        ModalOverlay { on_close, dismissable: !loading,
            div { class: "modal-header",
                div {
                    p { class: "eyebrow", "Confirmation" }
                    h2 { class: "modal-title", "{title}" }
                }
                button {
                    class: "pill-button",
                    r#type: "button",
                    aria_label: "Close delete confirmation",
                    disabled: loading,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
            p { class: "modal-text", "This will permanently remove the user account." }
            if has_public {
                label { class: "checkbox-card",
                    input {
                        r#type: "checkbox",
                        checked: keep_public(),
                        disabled: loading,
                        onchange: move |evt: FormEvent| keep_public.set(evt.checked()),
                    }
                    div {
                        span { class: "checkbox-title", "Keep public meditations" }
                        p { class: "field-hint",
                            "Convert user to benevolent account to preserve their public meditations"
                        }
                    }
                }
            }
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
                    onclick: move |_| on_confirm.call(has_public.then(|| keep_public())),
                    if loading { "Deleting..." } else { "Delete user" }
                }
            }
        }
    }
}
