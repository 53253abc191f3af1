use dioxus::prelude::*;
use store::{DraftErrors, Meditation, MeditationPatch, Visibility};

use crate::components::{
    use_toast, Button, ButtonVariant, FieldError, Input, Label, Select, Textarea, ToastOptions,
};
use crate::messages::delete_meditation_error;
use crate::modal_overlay::ModalOverlay;
use crate::modals::ModalConfirmDelete;
use crate::providers::{use_api, use_auth, use_meditations};

/// Read-only view of a meditation. Its owner can switch to editing the
/// title, description and visibility, or delete it.
#[component]
pub fn ModalMeditationDetails(meditation: Meditation, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut meditations = use_meditations();
    let toast = use_toast();

    let id = meditation.id;
    let is_owner = match (meditation.owner_user_id, auth.read().user_id()) {
        (Some(owner), Some(user)) => owner == user,
        _ => false,
    };

    let mut editing = use_signal(|| false);
    let mut title = use_signal(|| meditation.title.clone());
    let mut description = use_signal(|| meditation.description.clone().unwrap_or_default());
    let mut visibility = use_signal(|| Visibility::from_form_value(&meditation.visibility));
    let mut errors = use_signal(DraftErrors::default);
    let mut updating = use_signal(|| false);
    let mut confirming = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let on_update = move |_| async move {
        let patch = match MeditationPatch::from_edit(id, &title(), &description(), visibility()) {
            Ok(patch) => patch,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(DraftErrors::default());
        updating.set(true);
        match api::mantras::update_mantra(&api.client(), &patch).await {
            Ok(_) => {
                meditations.write().update_meditation(patch);
                toast.success("Meditation updated.".to_string(), ToastOptions::new());
                editing.set(false);
            }
            Err(e) => {
                tracing::warn!("Update of meditation {id} failed: {e}");
                toast.error(e.message_or("Unable to update meditation."), ToastOptions::new());
            }
        }
        updating.set(false);
    };

    let on_delete = move |_| async move {
        deleting.set(true);
        match api::mantras::delete_mantra(&api.client(), id).await {
            Ok(_) => {
                meditations.write().delete_meditation(id);
                toast.success("Meditation deleted.".to_string(), ToastOptions::new());
                deleting.set(false);
                confirming.set(false);
                on_close.call(());
            }
            Err(e) => {
                tracing::warn!("Delete of meditation {id} failed: {e}");
                toast.error(delete_meditation_error(&e), ToastOptions::new());
                deleting.set(false);
            }
        }
    };

    let confirm_title = format!("Delete {}", meditation.title);
    let title_error = errors.read().title.as_ref().map(ToString::to_string);
    let description_error = errors.read().description.as_ref().map(ToString::to_string);
    let busy = updating() || deleting();
    let read_only = !editing();

    rsx! {
        ModalOverlay { on_close, dismissable: !confirming(),
            div { class: "modal-header",
                div {
                    p { class: "eyebrow", "Details" }
                    h2 { class: "modal-title", "Meditation Details" }
                }
                if is_owner && !editing() {
                    button {
                        class: "pill-button",
                        r#type: "button",
                        aria_label: "Edit meditation",
                        onclick: move |_| editing.set(true),
                        "Edit"
                    }
                }
            }
            div { class: "form-stack",
                div {
                    Label { html_for: "meditation-title", "Title" }
                    Input {
                        id: "meditation-title",
                        r#type: "text",
                        value: "{title}",
                        disabled: read_only,
                        invalid: title_error.is_some(),
                        oninput: move |evt: FormEvent| {
                            title.set(evt.value());
                            errors.write().title = None;
                        },
                    }
                    FieldError { message: title_error.clone() }
                }
                div {
                    Label { html_for: "meditation-description", "Description" }
                    Textarea {
                        id: "meditation-description",
                        rows: "3",
                        value: "{description}",
                        disabled: read_only,
                        invalid: description_error.is_some(),
                        oninput: move |evt: FormEvent| {
                            description.set(evt.value());
                            errors.write().description = None;
                        },
                    }
                    FieldError { message: description_error.clone() }
                }
                div {
                    Label { html_for: "meditation-visibility", "Visibility" }
                    Select {
                        id: "meditation-visibility",
                        value: visibility().as_str(),
                        disabled: read_only,
                        onchange: move |evt: FormEvent| visibility.set(Visibility::from_form_value(&evt.value())),
                        option { value: "public", "Public" }
                        option { value: "private", "Private" }
                    }
                }
            }
            if is_owner {
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy,
                        onclick: move |_| confirming.set(true),
                        "Delete"
                    }
                    Button {
                        disabled: read_only || busy,
                        onclick: on_update,
                        if updating() { "Updating..." } else { "Update" }
                    }
                }
            }
        }
        if confirming() {
            ModalConfirmDelete {
                title: confirm_title,
                message: "This will permanently remove this meditation from your library.",
                confirm_label: "Delete meditation",
                loading: deleting(),
                on_close: move |_| confirming.set(false),
                on_confirm: on_delete,
            }
        }
    }
}
