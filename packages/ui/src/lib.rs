//! # UI crate: shared screens and components for the Mantrify front-end
//!
//! Platform crates (only `web` today) own routing and hand navigation to these
//! components as `EventHandler` callbacks. Everything else lives here.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`components`] | Buttons, form inputs, toasts |
//! | [`modals`] | Login, register, upload, confirmation and detail dialogs |
//! | [`tables`] | Meditation library and the admin tables |
//! | [`forms`] | The create-meditation script builder |
//! | [`views`] | Home, admin and forgot-password screens |
//!
//! Shared state is provided once by [`AppProvider`] and read back through the
//! `use_*` hooks.

pub mod components;
pub mod forms;
pub mod modals;
pub mod tables;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod app_shell;
pub use app_shell::AppShell;

mod audio_player;
pub use audio_player::AudioPlayer;

mod files;
mod hooks;
mod messages;
mod platform;

mod loading_overlay;
pub use loading_overlay::LoadingOverlay;

mod modal_overlay;
pub use modal_overlay::{ModalHeader, ModalOverlay};

mod navigation;
pub use navigation::Navigation;

mod protected_route;
pub use protected_route::ProtectedRoute;

mod providers;
pub use providers::{use_api, use_auth, use_meditations, use_ui, Api, AppProvider};
