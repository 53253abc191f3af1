//! Browser glue. Every function has a native fallback so the crate also
//! builds (and its pure parts test) off-wasm.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "mantrify.auth";

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The persisted session JSON, if any.
pub fn load_session() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(SESSION_KEY).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn save_session(_json: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(SESSION_KEY, _json) {
                tracing::warn!("Could not persist session: {e:?}");
            }
        }
    }
}

pub fn clear_session() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(SESSION_KEY) {
                tracing::warn!("Could not clear session: {e:?}");
            }
        }
    }
}

/// Hide body overflow. Returns the previous value for [`restore_body_scroll`].
pub fn lock_body_scroll() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let original = style.get_property_value("overflow").ok();
        if let Err(e) = style.set_property("overflow", "hidden") {
            tracing::debug!("Could not lock body scroll: {e:?}");
        }
        original
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn restore_body_scroll(_original: Option<String>) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let value = _original.as_deref().unwrap_or("");
            if let Err(e) = body.style().set_property("overflow", value) {
                tracing::debug!("Could not restore body scroll: {e:?}");
            }
        }
    }
}

/// Wrap `bytes` in a Blob and return an object URL for it.
pub fn create_object_url(_bytes: &[u8], _mime: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let array = js_sys::Uint8Array::from(_bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(_mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| tracing::warn!("Could not create blob: {e:?}"))
            .ok()?;
        web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| tracing::warn!("Could not create object URL: {e:?}"))
            .ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn revoke_object_url(_url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = web_sys::Url::revoke_object_url(_url) {
            tracing::debug!("Could not revoke {_url}: {e:?}");
        }
    }
}

/// Save `bytes` to the user's downloads under `filename`.
pub fn download_bytes(_filename: &str, _bytes: &[u8], _mime: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let url = create_object_url(_bytes, _mime).ok_or("Could not prepare download")?;
        let anchor = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("a").ok())
            .and_then(|e| e.dyn_into::<web_sys::HtmlAnchorElement>().ok())
            .ok_or("Could not prepare download")?;
        anchor.set_href(&url);
        anchor.set_download(_filename);
        anchor.click();
        revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("Downloads are only available in the browser".to_string())
    }
}

/// Reset the `<input type="file">` with `id` so it shows no selection.
pub fn clear_file_input(_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
        match input {
            Some(input) => input.set_value(""),
            None => tracing::debug!("No file input {_id} to clear"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn audio_element(id: &str) -> Option<web_sys::HtmlAudioElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlAudioElement>()
        .ok()
}

/// Point the `<audio>` element `id` at `src` and start playback.
pub async fn play_audio(_id: &str, _src: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let audio = audio_element(_id).ok_or("Audio player unavailable")?;
        if audio.src() != _src {
            audio.set_src(_src);
        }
        let promise = audio.play().map_err(|e| {
            tracing::warn!("play() rejected for {_id}: {e:?}");
            "Playback error. Please try again."
        })?;
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::warn!("Playback of {_id} failed: {e:?}");
                "Playback error. Please try again.".to_string()
            })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err("Playback is only available in the browser".to_string())
    }
}

pub fn pause_audio(_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(audio) = audio_element(_id) {
            if let Err(e) = audio.pause() {
                tracing::debug!("Could not pause {_id}: {e:?}");
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_fallbacks_do_not_touch_the_dom() {
        assert_eq!(load_session(), None);
        save_session("{}");
        clear_session();
        assert_eq!(lock_body_scroll(), None);
        restore_body_scroll(Some("auto".to_string()));
        assert_eq!(create_object_url(b"ID3", "audio/mpeg"), None);
        clear_file_input("restore-backup-file");
        pause_audio("audio-player-1");
    }

    #[test]
    fn test_download_reports_missing_browser() {
        let err = download_bytes("backup.zip", b"PK", "application/zip").unwrap_err();
        assert_eq!(err, "Downloads are only available in the browser");
    }

    #[tokio::test]
    async fn test_play_audio_reports_missing_browser() {
        let err = play_audio("audio-player-1", "blob:x").await.unwrap_err();
        assert_eq!(err, "Playback is only available in the browser");
    }
}
