use dioxus::prelude::*;

use ui::views::AdminView;
use ui::ProtectedRoute;

use crate::Route;

/// Admin dashboard; anyone else is sent back home.
#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();

    rsx! {
        ProtectedRoute {
            require_admin: true,
            on_redirect: move |_| {
                nav.replace(Route::Home {});
            },
            AdminView {}
        }
    }
}
