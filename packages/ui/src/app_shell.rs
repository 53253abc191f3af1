use dioxus::prelude::*;

use crate::loading_overlay::LoadingOverlay;
use crate::modals::{ModalLogin, ModalRegister};
use crate::navigation::Navigation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthModal {
    Login,
    Register,
}

/// Page chrome: navigation, the login/register modals and the global loader.
#[component]
pub fn AppShell(
    on_navigate_home: EventHandler<()>,
    on_navigate_admin: EventHandler<()>,
    on_navigate_forgot_password: EventHandler<()>,
    children: Element,
) -> Element {
    let mut modal = use_signal(|| None::<AuthModal>);

    rsx! {
        Navigation {
            on_navigate_home,
            on_navigate_admin,
            on_login_click: move |_| modal.set(Some(AuthModal::Login)),
        }
        main { class: "page", {children} }
        match modal() {
            Some(AuthModal::Login) => rsx! {
                ModalLogin {
                    on_close: move |_| modal.set(None),
                    on_switch_to_register: move |_| modal.set(Some(AuthModal::Register)),
                    on_forgot_password: move |_| {
                        modal.set(None);
                        on_navigate_forgot_password.call(());
                    },
                }
            },
            Some(AuthModal::Register) => rsx! {
                ModalRegister {
                    on_close: move |_| modal.set(None),
                    on_switch_to_login: move |_| modal.set(Some(AuthModal::Login)),
                }
            },
            None => rsx! {},
        }
        LoadingOverlay {}
    }
}
