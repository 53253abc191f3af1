use dioxus::prelude::*;

use store::config::{ENV_API_BASE_URL, ENV_ENVIRONMENT, ENV_LOG_LEVEL};
use store::AppConfig;
use ui::{AppProvider, AppShell};
use views::{Admin, ForgotPassword, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/admin")]
        Admin {},
        #[route("/forgot-password")]
        ForgotPassword {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Configuration is baked in at build time; a browser bundle has no environment.
fn load_config() -> Result<AppConfig, store::ConfigError> {
    AppConfig::from_env_with(|key| {
        let value = match key {
            ENV_API_BASE_URL => option_env!("MANTRIFY_API_BASE_URL"),
            ENV_ENVIRONMENT => option_env!("MANTRIFY_ENV"),
            ENV_LOG_LEVEL => option_env!("MANTRIFY_LOG_LEVEL"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

fn main() {
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let level = config
        .log_level()
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    dioxus::logger::init(level).ok();
    if let Some(e) = config_error {
        tracing::warn!("Invalid build configuration, using defaults: {e}");
    }
    tracing::info!("Starting Mantrify against {}", config.api_base_url());

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Mantrify" }

        AppProvider { config,
            Router::<Route> {}
        }
    }
}

/// Navigation, auth modals and the global loader around every page.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        AppShell {
            on_navigate_home: move |_| {
                nav.push(Route::Home {});
            },
            on_navigate_admin: move |_| {
                nav.push(Route::Admin {});
            },
            on_navigate_forgot_password: move |_| {
                nav.push(Route::ForgotPassword {});
            },
            Outlet::<Route> {}
        }
    }
}

/// Unknown paths land on the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
