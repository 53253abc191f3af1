use dioxus::prelude::*;

use crate::providers::use_auth;

/// Renders `children` only for a signed-in user (and only for admins when
/// `require_admin` is set); otherwise calls `on_redirect`.
#[component]
pub fn ProtectedRoute(
    #[props(default)] require_admin: bool,
    on_redirect: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let allowed = use_memo(move || auth.read().may_access(require_admin));

    use_effect(move || {
        if !allowed() {
            tracing::debug!("Access denied, redirecting home");
            on_redirect.call(());
        }
    });

    if allowed() {
        rsx! { {children} }
    } else {
        rsx! {
            div { class: "checking-access", "Checking access..." }
        }
    }
}
