use dioxus::html::FileData;
use dioxus::prelude::*;
use store::validation::validate_mp3_file;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::files::{picked_file, read_upload};
use crate::messages::upload_sound_error;
use crate::modal_overlay::ModalOverlay;
use crate::providers::use_api;

#[component]
pub fn ModalUploadSoundFile(on_close: EventHandler<()>, on_uploaded: EventHandler<()>) -> Element {
    let api = use_api();
    let mut file = use_signal(|| None::<FileData>);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    // Written from the upload body stream, which must be Send off-wasm.
    let mut progress = use_signal_sync(|| 0u8);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error.set(None);

        let Some(selected) = file() else {
            error.set(Some("Please select an MP3 file to upload.".to_string()));
            return;
        };
        if let Err(e) = validate_mp3_file(&selected.name(), selected.size()) {
            error.set(Some(e.to_string()));
            return;
        }

        submitting.set(true);
        progress.set(0);
        let upload = match read_upload(&selected).await {
            Ok(upload) => upload,
            Err(message) => {
                error.set(Some(message));
                submitting.set(false);
                return;
            }
        };

        let name_value = name();
        let description_value = description();
        let result = api::sounds::upload_sound_file(
            &api.client(),
            upload,
            Some(name_value.as_str()),
            Some(description_value.as_str()),
            move |percent| progress.set(percent),
        )
        .await;
        submitting.set(false);

        match result {
            Ok(_) => {
                on_uploaded.call(());
                on_close.call(());
            }
            Err(e) => {
                tracing::warn!("Sound upload failed: {e}");
                error.set(Some(upload_sound_error(&e)));
            }
        }
    };

    let busy = submitting();
    let percent = progress();

    rsx! {
        ModalOverlay { on_close,
            div { class: "modal-header",
                div {
                    p { class: "eyebrow", "Sound Files" }
                    h2 { class: "modal-title", "Upload Sound File" }
                }
                button {
                    class: "pill-button",
                    r#type: "button",
                    aria_label: "Close upload modal",
                    disabled: busy,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
            form { class: "form-stack", onsubmit,
                if let Some(message) = error() {
                    div { class: "alert alert-error", "{message}" }
                }
                div {
                    Label { html_for: "sound-file", "MP3 file" }
                    input {
                        id: "sound-file",
                        class: "input",
                        r#type: "file",
                        accept: ".mp3,audio/mpeg",
                        disabled: busy,
                        onchange: move |evt: FormEvent| {
                            file.set(picked_file(&evt));
                            error.set(None);
                        },
                    }
                    p { class: "field-hint", "Max file size: 50MB." }
                }
                div {
                    Label { html_for: "sound-name", "Name (optional)" }
                    Input {
                        id: "sound-name",
                        r#type: "text",
                        value: "{name}",
                        placeholder: "Soft rain",
                        disabled: busy,
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "sound-description", "Description (optional)" }
                    Textarea {
                        id: "sound-description",
                        rows: "3",
                        value: "{description}",
                        placeholder: "Gentle ambient soundscape.",
                        disabled: busy,
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                }
                div {
                    div { class: "progress-label",
                        span { "Upload progress" }
                        span { "{percent}%" }
                    }
                    div { class: "progress-track",
                        div { class: "progress-bar", style: "width: {percent}%" }
                    }
                }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: busy,
                        if busy { "Uploading..." } else { "Upload" }
                    }
                }
            }
        }
    }
}
