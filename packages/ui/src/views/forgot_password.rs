use dioxus::prelude::*;
use store::validation::validate_email;
use store::ValidationError;

use crate::components::{Button, FieldError, Input, Label};
use crate::providers::use_api;

/// Requests a password-reset email. The confirmation is shown whether or
/// not the address is registered.
#[component]
pub fn ForgotPasswordView(on_back: EventHandler<()>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut email_error = use_signal(|| None::<String>);
    let mut general_error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        email_error.set(None);
        general_error.set(None);

        let normalized = email().trim().to_lowercase();
        if !validate_email(&normalized) {
            email_error.set(Some(ValidationError::InvalidEmail.to_string()));
            return;
        }

        loading.set(true);
        match api::auth::forgot_password(&api.client(), &normalized).await {
            Ok(response) => {
                let message = if response.message.is_empty() {
                    "If an account exists for that email, a reset link is on its way.".to_string()
                } else {
                    response.message
                };
                sent.set(Some(message));
                email.set(String::new());
            }
            Err(e) => {
                tracing::warn!("Password reset request failed: {e}");
                general_error.set(Some(e.message_or("Unable to send reset email. Please try again.")));
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "container narrow",
            section { class: "card card-padded",
                h1 { class: "modal-title", "Forgot Password" }
                p { class: "modal-text",
                    "Enter the email you registered with and we will send you a reset link."
                }
                if let Some(message) = sent() {
                    div { class: "alert alert-success", "{message}" }
                }
                if let Some(message) = general_error() {
                    div { class: "alert alert-error", "{message}" }
                }
                form { class: "form-stack", onsubmit,
                    div {
                        Label { html_for: "forgot-email", "Email" }
                        Input {
                            id: "forgot-email",
                            r#type: "email",
                            value: "{email}",
                            placeholder: "you@example.com",
                            autocomplete: "email",
                            required: true,
                            disabled: loading(),
                            invalid: email_error().is_some(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        FieldError { message: email_error() }
                    }
                    Button { r#type: "submit", class: "w-full", disabled: loading(),
                        if loading() { "Sending..." } else { "Send reset link" }
                    }
                }
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to home"
                }
            }
        }
    }
}
