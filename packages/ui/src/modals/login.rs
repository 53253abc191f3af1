use dioxus::prelude::*;
use store::validation::{validate_email, validate_password};
use store::ValidationError;

use crate::components::{Button, FieldError, Input, Label};
use crate::messages::login_error;
use crate::modal_overlay::{ModalHeader, ModalOverlay};
use crate::providers::{use_api, use_auth};

#[derive(Clone, Debug, Default, PartialEq)]
struct LoginErrors {
    email: Option<String>,
    password: Option<String>,
    general: Option<String>,
}

#[component]
pub fn ModalLogin(
    on_close: EventHandler<()>,
    on_switch_to_register: EventHandler<()>,
    on_forgot_password: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(LoginErrors::default);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        errors.set(LoginErrors::default());

        let normalized = email().trim().to_lowercase();
        if !validate_email(&normalized) {
            errors.write().email = Some(ValidationError::InvalidEmail.to_string());
            return;
        }
        if let Err(e) = validate_password(&password()) {
            errors.write().password = Some(e.to_string());
            return;
        }

        loading.set(true);
        match api::auth::login(&api.client(), &normalized, &password()).await {
            Ok(response) => {
                tracing::info!("Signed in as {}", response.user.email);
                auth.write().login(response.user, response.access_token);
                email.set(String::new());
                password.set(String::new());
                loading.set(false);
                on_close.call(());
            }
            Err(e) => {
                tracing::warn!("Login failed: {e}");
                errors.write().general = Some(login_error(&e));
                loading.set(false);
            }
        }
    };

    let current = errors();

    rsx! {
        ModalOverlay { on_close,
            ModalHeader { title: "Welcome Back", on_close }
            if let Some(general) = current.general.clone() {
                div { class: "alert alert-error", "{general}" }
            }
            form { class: "form-stack", onsubmit,
                div {
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
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
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        value: "{password}",
                        placeholder: "••••••••",
                        autocomplete: "current-password",
                        required: true,
                        disabled: loading(),
                        invalid: current.password.is_some(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    FieldError { message: current.password.clone() }
                }
                div { class: "text-right",
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_forgot_password.call(()),
                        "Forgot password?"
                    }
                }
                Button { r#type: "submit", class: "w-full", disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }
            p { class: "modal-footer-text",
                "Don't have an account? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| on_switch_to_register.call(()),
                    "Register"
                }
            }
        }
    }
}
