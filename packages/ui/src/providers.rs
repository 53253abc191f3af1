//! Application-wide context: session, library, global loader and API handle.

use api::ApiClient;
use dioxus::prelude::*;
use store::{AppConfig, AuthState, MeditationState, UiState};

use crate::components::ToastProvider;
use crate::platform;

/// Copyable handle to the API. [`Api::client`] attaches the current
/// session's bearer token, so a login takes effect on the next call.
#[derive(Clone, Copy, PartialEq)]
pub struct Api {
    base: Signal<ApiClient>,
    auth: Signal<AuthState>,
}

impl Api {
    pub fn client(&self) -> ApiClient {
        let token = self.auth.read().bearer_token().map(str::to_string);
        self.base.read().clone().with_token(token)
    }
}

fn restore_session() -> AuthState {
    let Some(json) = platform::load_session() else {
        return AuthState::default();
    };
    match AuthState::from_json(&json) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("Discarding unreadable session: {e}");
            platform::clear_session();
            AuthState::default()
        }
    }
}

/// Root provider. Wrap the router with this component.
#[component]
pub fn AppProvider(config: AppConfig, children: Element) -> Element {
    let auth = use_signal(restore_session);
    let meditations = use_signal(MeditationState::default);
    let ui = use_signal(UiState::default);
    let base = use_signal({
        let config = config.clone();
        move || ApiClient::from_config(&config)
    });

    use_context_provider(|| auth);
    use_context_provider(|| meditations);
    use_context_provider(|| ui);
    use_context_provider(|| Api { base, auth });

    use_effect(move || {
        let state = auth();
        if !state.is_authenticated {
            platform::clear_session();
            return;
        }
        match state.to_json() {
            Ok(json) => platform::save_session(&json),
            Err(e) => tracing::error!("Could not serialise session: {e}"),
        }
    });

    rsx! {
        ToastProvider { {children} }
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_meditations() -> Signal<MeditationState> {
    use_context::<Signal<MeditationState>>()
}

pub fn use_ui() -> Signal<UiState> {
    use_context::<Signal<UiState>>()
}

pub fn use_api() -> Api {
    use_context::<Api>()
}
