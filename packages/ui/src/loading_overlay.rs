use dioxus::prelude::*;

use crate::providers::use_ui;

/// Blocking spinner driven by the global [`store::UiState`].
#[component]
pub fn LoadingOverlay() -> Element {
    let ui = use_ui();
    let state = ui();
    if !state.loading {
        return rsx! {};
    }
    let message = state.loading_message.unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div { class: "loading-overlay", role: "alert", aria_busy: "true",
            div { class: "loading-card",
                div { class: "spinner" }
                p { "{message}" }
            }
        }
    }
}
