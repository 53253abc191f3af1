use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaXmark};
use dioxus_free_icons::Icon;

use crate::hooks::use_body_scroll_lock;
use crate::providers::use_auth;

/// Top bar: brand, Home, Admin (admins only) and Login/Logout. On narrow
/// screens the links move into a drawer.
#[component]
pub fn Navigation(
    on_navigate_home: EventHandler<()>,
    on_navigate_admin: EventHandler<()>,
    on_login_click: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let mut mobile_open = use_signal(|| false);

    let is_authenticated = auth.read().is_authenticated;
    let is_admin = auth.read().is_admin();

    let mut on_auth_click = move || {
        mobile_open.set(false);
        if auth.read().is_authenticated {
            tracing::info!("Signing out");
            auth.write().logout();
        } else {
            on_login_click.call(());
        }
    };
    let mut go_home = move || {
        mobile_open.set(false);
        on_navigate_home.call(());
    };
    let mut go_admin = move || {
        mobile_open.set(false);
        on_navigate_admin.call(());
    };
    let auth_label = if is_authenticated { "Logout" } else { "Login" };

    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                a {
                    class: "brand",
                    href: "/",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        go_home();
                    },
                    "Mantrify"
                }
                nav { class: "nav-links",
                    NavLinks { is_admin, on_home: move |_| go_home(), on_admin: move |_| go_admin() }
                    button {
                        class: "pill-button",
                        r#type: "button",
                        onclick: move |_| on_auth_click(),
                        "{auth_label}"
                    }
                }
                button {
                    class: "nav-toggle",
                    r#type: "button",
                    aria_label: "Open navigation menu",
                    aria_expanded: "{mobile_open}",
                    onclick: move |_| mobile_open.set(true),
                    Icon { icon: FaBars, width: 20, height: 20 }
                }
            }
            if mobile_open() {
                MobileDrawer {
                    on_close: move |_| mobile_open.set(false),
                    div { class: "drawer-links",
                        NavLinks { is_admin, on_home: move |_| go_home(), on_admin: move |_| go_admin() }
                    }
                    button {
                        class: "pill-button w-full",
                        r#type: "button",
                        onclick: move |_| on_auth_click(),
                        "{auth_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn NavLinks(is_admin: bool, on_home: EventHandler<()>, on_admin: EventHandler<()>) -> Element {
    rsx! {
        a {
            class: "nav-link",
            href: "/",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_home.call(());
            },
            "Home"
        }
        if is_admin {
            a {
                class: "nav-link",
                href: "/admin",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_admin.call(());
                },
                "Admin"
            }
        }
    }
}

#[component]
fn MobileDrawer(on_close: EventHandler<()>, children: Element) -> Element {
    use_body_scroll_lock();

    rsx! {
        div { class: "drawer-root",
            button {
                class: "drawer-backdrop",
                r#type: "button",
                aria_label: "Close navigation menu",
                onclick: move |_| on_close.call(()),
            }
            div { class: "drawer-panel",
                div { class: "drawer-header",
                    span { class: "brand", "Mantrify" }
                    button {
                        class: "pill-button",
                        r#type: "button",
                        aria_label: "Close menu",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                        " Close"
                    }
                }
                {children}
            }
        }
    }
}
