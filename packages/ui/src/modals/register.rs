use std::time::Duration;

use dioxus::prelude::*;
use store::validation::{validate_email, validate_password, validate_password_match};
use store::ValidationError;

use crate::components::{Button, FieldError, Input, Label};
use crate::messages::register_error;
use crate::modal_overlay::{ModalHeader, ModalOverlay};
use crate::platform;
use crate::providers::use_api;

const SUCCESS_MESSAGE: &str =
    "Registration successful! Please check your email to verify your account before logging in.";

#[derive(Clone, Debug, Default, PartialEq)]
struct RegisterErrors {
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
    general: Option<String>,
}

#[component]
pub fn ModalRegister(on_close: EventHandler<()>, on_switch_to_login: EventHandler<()>) -> Element {
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(RegisterErrors::default);
    let mut success = use_signal(|| None::<&'static str>);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        errors.set(RegisterErrors::default());
        success.set(None);

        let normalized = email().trim().to_lowercase();
        if !validate_email(&normalized) {
            errors.write().email = Some(ValidationError::InvalidEmail.to_string());
            return;
        }
        if let Err(e) = validate_password(&password()) {
            errors.write().password = Some(e.to_string());
            return;
        }
        if let Err(e) = validate_password_match(&password(), &confirm_password()) {
            errors.write().confirm_password = Some(e.to_string());
            return;
        }

        loading.set(true);
        match api::auth::register(&api.client(), &normalized, &password()).await {
            Ok(_) => {
                success.set(Some(SUCCESS_MESSAGE));
                email.set(String::new());
                password.set(String::new());
                confirm_password.set(String::new());
                // Cancelled with this component if the modal closes first.
                spawn(async move {
                    platform::sleep(Duration::from_secs(3)).await;
                    on_switch_to_login.call(());
                });
            }
            Err(e) => {
                tracing::warn!("Registration failed: {e}");
                errors.write().general = Some(register_error(&e));
            }
        }
        loading.set(false);
    };

    let current = errors();

    rsx! {
        ModalOverlay { on_close,
            ModalHeader { title: "Create Account", on_close }
            if let Some(message) = success() {
                div { class: "alert alert-success", "{message}" }
            }
            if let Some(general) = current.general.clone() {
                div { class: "alert alert-error", "{general}" }
            }
            form { class: "form-stack", onsubmit,
                div {
                    Label { html_for: "register-email", "Email" }
                    Input {
                        id: "register-email",
                        r#type: "email",
                        value: "{email}",
                        placeholder: "you@example.com",
                        autocomplete: "email",
                        required: true,
                        disabled: loading(),
                        invalid: current.email.is_some(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FieldError { message: current.email.clone() }
                }
                div {
                    Label { html_for: "register-password", "Password" }
                    Input {
                        id: "register-password",
                        r#type: "password",
                        value: "{password}",
                        placeholder: "••••••••",
                        autocomplete: "new-password",
                        required: true,
                        disabled: loading(),
                        invalid: current.password.is_some(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    FieldError { message: current.password.clone() }
                    p { class: "field-hint", "Minimum 6 characters" }
                }
                div {
                    Label { html_for: "register-confirm", "Confirm Password" }
                    Input {
                        id: "register-confirm",
                        r#type: "password",
                        value: "{confirm_password}",
                        placeholder: "••••••••",
                        autocomplete: "new-password",
                        required: true,
                        disabled: loading(),
                        invalid: current.confirm_password.is_some(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                    FieldError { message: current.confirm_password.clone() }
                }
                Button { r#type: "submit", class: "w-full", disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }
            p { class: "modal-footer-text",
                "Already have an account? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| on_switch_to_login.call(()),
                    "Login"
                }
            }
        }
    }
}
