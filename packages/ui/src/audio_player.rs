use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::platform;
use crate::providers::{use_api, use_auth};

const PLAYBACK_ERROR: &str = "Playback error. Please try again.";

/// Play/pause toggle for one meditation.
///
/// Signed-in listeners fetch the audio with their bearer token and play it
/// from a blob URL, fetched once per player and revoked on unmount. Anonymous
/// listeners stream straight from the public URL.
#[component]
pub fn AudioPlayer(mantra_id: u64, title: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut playing = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let object_url = use_hook(|| Rc::new(RefCell::new(None::<String>)));
    let element_id = format!("audio-player-{mantra_id}");

    use_drop({
        let object_url = object_url.clone();
        move || {
            if let Some(url) = object_url.borrow_mut().take() {
                platform::revoke_object_url(&url);
            }
        }
    });

    let on_toggle = {
        let element_id = element_id.clone();
        move |_| {
            let element_id = element_id.clone();
            let object_url = object_url.clone();
            async move {
                error.set(None);
                if playing() {
                    platform::pause_audio(&element_id);
                    return;
                }

                loading.set(true);
                let client = api.client();
                let src = if auth.read().bearer_token().is_some() {
                    let cached = object_url.borrow().clone();
                    match cached {
                        Some(url) => Ok(url),
                        None => authenticated_source(&client, mantra_id).await.inspect(|url| {
                            *object_url.borrow_mut() = Some(url.clone());
                        }),
                    }
                } else {
                    Ok(api::mantras::stream_url(&client, mantra_id))
                };

                let result = match src {
                    Ok(src) => platform::play_audio(&element_id, &src).await,
                    Err(e) => Err(e),
                };
                if let Err(message) = result {
                    error.set(Some(message));
                }
                loading.set(false);
            }
        }
    };

    let label = if playing() { "Pause" } else { "Play" };

    rsx! {
        div { class: "audio-player",
            button {
                class: "pill-button",
                r#type: "button",
                aria_label: "{label} {title}",
                disabled: loading(),
                onclick: on_toggle,
                if loading() { "Loading..." } else { "{label}" }
            }
            audio {
                id: "{element_id}",
                preload: "none",
                onplay: move |_| playing.set(true),
                onpause: move |_| playing.set(false),
                onended: move |_| playing.set(false),
                onerror: move |_| {
                    playing.set(false);
                    loading.set(false);
                    error.set(Some(PLAYBACK_ERROR.to_string()));
                },
            }
            if let Some(message) = error() {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

async fn authenticated_source(client: &api::ApiClient, mantra_id: u64) -> Result<String, String> {
    let bytes = api::mantras::fetch_stream(client, mantra_id).await.map_err(|e| {
        tracing::warn!("Stream of meditation {mantra_id} failed: {e}");
        "Unable to stream this meditation".to_string()
    })?;
    platform::create_object_url(&bytes, "audio/mpeg").ok_or_else(|| PLAYBACK_ERROR.to_string())
}
