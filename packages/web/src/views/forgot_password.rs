use dioxus::prelude::*;

use ui::views::ForgotPasswordView;

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let nav = use_navigator();

    rsx! {
        ForgotPasswordView {
            on_back: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
