//! The create-meditation form.
//!
//! All editing goes through a [`MeditationDraft`] held in one signal, so the
//! row numbering and validation rules live in `store` and this module only
//! renders them.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronUp, FaPlus};
use dioxus_free_icons::Icon;
use store::validation::{text_length, DESCRIPTION_MAX_CHARS};
use store::{MeditationDraft, MoveDirection, RowField, RowKind, ScriptRow, SoundFile, Visibility};

use crate::components::{use_toast, Button, FieldError, Input, Label, Select, Textarea, ToastOptions};
use crate::providers::{use_api, use_auth, use_meditations};

/// Hidden for anonymous visitors.
#[component]
pub fn CreateMeditationForm() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut meditations = use_meditations();
    let toast = use_toast();
    let mut expanded = use_signal(|| false);
    let mut draft = use_signal(MeditationDraft::new);
    let mut sound_files = use_signal(Vec::<SoundFile>::new);
    let mut sounds_loading = use_signal(|| false);
    let mut sounds_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if !auth.read().is_authenticated {
            return;
        }
        spawn(async move {
            sounds_loading.set(true);
            sounds_error.set(None);
            match api::sounds::get_sound_files(&api.client()).await {
                Ok(files) => sound_files.set(files),
                Err(e) => {
                    tracing::warn!("Loading sound files failed: {e}");
                    sounds_error.set(Some(e.message_or("Unable to load sound files.")));
                }
            }
            sounds_loading.set(false);
        });
    });

    let on_toggle = move |_| {
        let open = !expanded();
        if open {
            draft.write().open();
        }
        expanded.set(open);
    };

    let on_submit = move |_| async move {
        let Some(request) = draft.write().submit() else {
            return;
        };
        submitting.set(true);
        let client = api.client();
        let result = match api::mantras::create_mantra(&client, &request).await {
            Ok(created) => {
                tracing::info!("Meditation queued as job {}", created.queue_id);
                api::mantras::get_all_mantras(&client, true).await
            }
            Err(e) => Err(e),
        };
        match result {
            Ok(list) => {
                meditations.write().set_meditations(list);
                toast.success("Meditation submitted successfully.".to_string(), ToastOptions::new());
                draft.write().reset();
                expanded.set(false);
            }
            Err(e) => {
                tracing::warn!("Submitting meditation failed: {e}");
                toast.error(e.message_or("Unable to submit meditation."), ToastOptions::new());
            }
        }
        submitting.set(false);
    };

    if !auth.read().is_authenticated {
        return rsx! {};
    }

    let current = draft();
    let rows = current.script.rows().to_vec();
    let total = rows.len();
    let description_len = text_length(&current.description);
    let title_error = current.errors.title.as_ref().map(ToString::to_string);
    let description_error = current.errors.description.as_ref().map(ToString::to_string);
    let can_submit = current.can_submit() && !submitting();

    rsx! {
        section { class: "card",
            button {
                class: "card-header card-toggle",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: on_toggle,
                div {
                    h2 { class: "card-title", "Create New Meditation" }
                    p { class: "card-subtitle", "Build a custom meditation sequence" }
                }
                span { class: "icon-button",
                    if expanded() {
                        Icon { icon: FaChevronUp, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaChevronDown, width: 14, height: 14 }
                    }
                }
            }
            if expanded() {
                div { class: "card-body form-stack",
                    div { class: "form-grid",
                        div { class: "span-2",
                            Label { html_for: "create-title", "Title" }
                            Input {
                                id: "create-title",
                                r#type: "text",
                                value: "{current.title}",
                                placeholder: "Evening clarity",
                                invalid: title_error.is_some(),
                                oninput: move |evt: FormEvent| draft.write().set_title(evt.value()),
                                onblur: move |_| draft.write().check_title(),
                            }
                            FieldError { message: title_error }
                        }
                        div { class: "span-2",
                            Label { html_for: "create-description", "Description (optional)" }
                            Textarea {
                                id: "create-description",
                                rows: "3",
                                value: "{current.description}",
                                placeholder: "Set an intention for the day with gentle pauses.",
                                invalid: description_error.is_some(),
                                oninput: move |evt: FormEvent| draft.write().set_description(evt.value()),
                            }
                            div { class: "field-meta",
                                span { class: if description_error.is_some() { "field-error" } else { "field-hint" },
                                    {description_error.clone().unwrap_or_else(|| "Keep it concise and helpful.".to_string())}
                                }
                                span { "{description_len}/{DESCRIPTION_MAX_CHARS}" }
                            }
                        }
                        div {
                            Label { html_for: "create-visibility", "Visibility" }
                            Select {
                                id: "create-visibility",
                                value: current.visibility.as_str(),
                                onchange: move |evt: FormEvent| {
                                    draft.write().visibility = Visibility::from_form_value(&evt.value());
                                },
                                option { value: "public", "Public" }
                                option { value: "private", "Private" }
                            }
                            p { class: "field-hint", "Private meditations are only visible to you." }
                        }
                    }
                    div { class: "rows-header",
                        h3 { "Meditation Rows" }
                        button {
                            class: "pill-button",
                            r#type: "button",
                            onclick: move |_| {
                                draft.write().script.add_row();
                            },
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            " Add Row"
                        }
                    }
                    if let Some(message) = sounds_error() {
                        p { class: "field-error", "{message}" }
                    }
                    div { class: "rows-stack",
                        for (index, row) in rows.into_iter().enumerate() {
                            ScriptRowEditor {
                                key: "{row.id}",
                                row,
                                is_first: index == 0,
                                is_last: index + 1 == total,
                                sound_files: sound_files(),
                                sounds_loading: sounds_loading(),
                                draft,
                            }
                        }
                    }
                    if total == 0 {
                        p { class: "field-hint", "Add a row to begin building your sequence." }
                    }
                    div { class: "form-footer",
                        Button { disabled: !can_submit, onclick: on_submit,
                            if submitting() { "Submitting..." } else { "Submit" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ScriptRowEditor(
    row: ScriptRow,
    is_first: bool,
    is_last: bool,
    sound_files: Vec<SoundFile>,
    sounds_loading: bool,
    mut draft: Signal<MeditationDraft>,
) -> Element {
    let id = row.id;
    let field_error = |field: RowField| draft.read().script.error(id, field).map(ToString::to_string);
    let text_error = field_error(RowField::Text);
    let speed_error = field_error(RowField::Speed);
    let pause_error = field_error(RowField::PauseDuration);
    let sound_error = field_error(RowField::SoundFile);
    let mut update = move |field: RowField, value: String| {
        draft.write().script.update_row(id, field, value);
    };

    rsx! {
        div { class: "script-row",
            div { class: "script-row-header",
                div { class: "script-row-title",
                    span { class: "row-number", "{id}" }
                    div {
                        p { class: "cell-strong", "Row {id}" }
                        p { class: "field-hint", "Select the row type" }
                    }
                }
                select {
                    class: "input input-compact",
                    aria_label: "Row {id} type",
                    value: row.kind.as_str(),
                    onchange: move |evt: FormEvent| {
                        draft.write().script.set_kind(id, RowKind::from_form_value(&evt.value()));
                    },
                    option { value: "text", "Text" }
                    option { value: "pause", "Pause" }
                    option { value: "sound", "Sound File" }
                }
            }
            match row.kind {
                RowKind::Text => rsx! {
                    div { class: "form-grid",
                        div { class: "span-2",
                            Label { html_for: "row-{id}-text", "Text" }
                            Textarea {
                                id: "row-{id}-text",
                                rows: "2",
                                value: "{row.text}",
                                placeholder: "Begin with a calming phrase...",
                                invalid: text_error.is_some(),
                                oninput: move |evt: FormEvent| update(RowField::Text, evt.value()),
                            }
                            FieldError { message: text_error.clone() }
                        }
                        div {
                            Label { html_for: "row-{id}-speed", "Speed (0.7-1.3)" }
                            Input {
                                id: "row-{id}-speed",
                                r#type: "number",
                                step: "0.1",
                                min: "0.7",
                                max: "1.3",
                                value: "{row.speed}",
                                placeholder: "1.0",
                                invalid: speed_error.is_some(),
                                oninput: move |evt: FormEvent| update(RowField::Speed, evt.value()),
                            }
                            FieldError { message: speed_error.clone() }
                        }
                    }
                },
                RowKind::Pause => rsx! {
                    div {
                        Label { html_for: "row-{id}-pause", "Duration (seconds)" }
                        Input {
                            id: "row-{id}-pause",
                            r#type: "number",
                            step: "0.1",
                            min: "0",
                            value: "{row.pause_duration}",
                            placeholder: "5",
                            invalid: pause_error.is_some(),
                            oninput: move |evt: FormEvent| update(RowField::PauseDuration, evt.value()),
                        }
                        FieldError { message: pause_error.clone() }
                    }
                },
                RowKind::Sound => rsx! {
                    div {
                        Label { html_for: "row-{id}-sound", "Select Sound File" }
                        Select {
                            id: "row-{id}-sound",
                            value: "{row.sound_file}",
                            disabled: sounds_loading,
                            invalid: sound_error.is_some(),
                            onchange: move |evt: FormEvent| update(RowField::SoundFile, evt.value()),
                            option { value: "",
                                if sounds_loading { "Loading sound files..." } else { "Select a sound file" }
                            }
                            for sound in sound_files.iter() {
                                option { key: "{sound.filename}", value: "{sound.filename}", "{sound.name}" }
                            }
                        }
                        FieldError { message: sound_error.clone() }
                    }
                },
            }
            div { class: "script-row-actions",
                button {
                    class: "pill-button",
                    r#type: "button",
                    disabled: is_first,
                    onclick: move |_| draft.write().script.move_row(id, MoveDirection::Up),
                    "Move Up"
                }
                button {
                    class: "pill-button",
                    r#type: "button",
                    disabled: is_last,
                    onclick: move |_| draft.write().script.move_row(id, MoveDirection::Down),
                    "Move Down"
                }
                button {
                    class: "pill-button pill-danger",
                    r#type: "button",
                    onclick: move |_| draft.write().script.delete_row(id),
                    "Delete Row"
                }
            }
        }
    }
}
