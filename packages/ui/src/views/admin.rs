//! # Admin dashboard
//!
//! Five independent sections, each owning its fetch, its delete flow and its
//! confirmation modal:
//!
//! | Section | Endpoint family | Destructive action |
//! |---------|-----------------|--------------------|
//! | Users | `/admin/users` | delete user, optionally keeping public meditations |
//! | Sound Files | `/sounds` | upload, delete |
//! | Meditations | `/admin/mantras` | delete any meditation |
//! | Queuer | `/admin/queuer` | delete job record |
//! | Database | `/database` | create, download, delete backups; restore from `.zip` |
//!
//! Long database operations raise the global loader from [`store::UiState`].

use dioxus::html::FileData;
use dioxus::prelude::*;
use store::validation::validate_backup_file;
use store::{AdminUser, BackupFile, Meditation, QueueRecord, SoundFile};

use crate::components::{use_toast, Button, ButtonVariant, ToastOptions};
use crate::files::{picked_file, read_upload};
use crate::modals::{ModalConfirmDelete, ModalConfirmDeleteUser, ModalUploadSoundFile};
use crate::platform;
use crate::providers::{use_api, use_auth, use_ui};
use crate::tables::{
    CollapsibleSection, FetchError, ListState, SkeletonRows, TableAdminDatabase,
    TableAdminMeditations, TableAdminQueuer, TableAdminSoundFiles, TableAdminUsers,
};

const SKELETON_ROWS: usize = 4;
const RESTORE_INPUT_ID: &str = "restore-backup-file";

#[component]
pub fn AdminView() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-header",
                p { class: "eyebrow", "Admin" }
                h1 { class: "page-title", "Manage Go Lightly" }
                p { class: "page-text",
                    "Review user accounts, meditation content, sound files, and queued jobs."
                }
            }
            UsersSection {}
            SoundFilesSection {}
            MeditationsSection {}
            QueuerSection {}
            DatabaseSection {}
        }
    }
}

/// Skeleton, error with retry, or the table produced by `ready`.
fn list_body<T: Clone>(
    state: &ListState<T>,
    on_retry: impl FnMut(()) + 'static,
    ready: impl FnOnce(Vec<T>) -> Element,
) -> Element {
    match state {
        ListState::Loading => rsx! { SkeletonRows { count: SKELETON_ROWS } },
        ListState::Failed(message) => rsx! {
            FetchError { message: message.clone(), on_retry }
        },
        ListState::Ready(items) => ready(items.clone()),
    }
}

#[component]
fn UsersSection() -> Element {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let mut users = use_signal(|| ListState::<AdminUser>::Loading);
    let mut target = use_signal(|| None::<AdminUser>);
    let mut deleting = use_signal(|| false);

    let load = move || {
        spawn(async move {
            users.set(ListState::Loading);
            let result = api::admin::get_users(&api.client()).await;
            users.set(ListState::from_result(result, "users"));
        });
    };
    use_hook(move || load());

    let on_confirm = move |save_public: Option<bool>| async move {
        let Some(user) = target() else {
            return;
        };
        if !auth.peek().can_delete_user(user.id) {
            toast.error("You cannot delete your own admin account.".to_string(), ToastOptions::new());
            target.set(None);
            return;
        }
        deleting.set(true);
        match api::admin::delete_user(&api.client(), user.id, save_public).await {
            Ok(_) => {
                users.write().remove_where(|u| u.id == user.id);
                toast.success("User deleted.".to_string(), ToastOptions::new());
                target.set(None);
            }
            Err(e) => {
                tracing::warn!("Delete of user {} failed: {e}", user.id);
                toast.error(e.message_or("Unable to delete user."), ToastOptions::new());
            }
        }
        deleting.set(false);
    };

    let current_user_id = auth.read().user_id();
    let body = list_body(&users.read(), move |_| load(), |users| {
        rsx! {
            TableAdminUsers {
                users,
                current_user_id,
                on_delete: move |user| target.set(Some(user)),
            }
        }
    });

    rsx! {
        CollapsibleSection {
            title: "Users",
            subtitle: "Manage registered users",
            expanded: true,
            toggle_label: "Toggle users",
            {body}
        }
        if let Some(user) = target() {
            ModalConfirmDeleteUser {
                user,
                loading: deleting(),
                on_close: move |_| target.set(None),
                on_confirm,
            }
        }
    }
}

#[component]
fn SoundFilesSection() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut sounds = use_signal(|| ListState::<SoundFile>::Loading);
    let mut target = use_signal(|| None::<SoundFile>);
    let mut deleting = use_signal(|| false);
    let mut upload_open = use_signal(|| false);

    let load = move || {
        spawn(async move {
            sounds.set(ListState::Loading);
            let result = api::sounds::get_sound_files(&api.client()).await;
            sounds.set(ListState::from_result(result, "sound files"));
        });
    };
    use_hook(move || load());

    let on_confirm = move |_| async move {
        let Some(sound) = target() else {
            return;
        };
        deleting.set(true);
        match api::sounds::delete_sound_file(&api.client(), sound.id).await {
            Ok(_) => {
                sounds.write().remove_where(|s| s.id == sound.id);
                toast.success("Sound file deleted.".to_string(), ToastOptions::new());
                target.set(None);
            }
            Err(e) => {
                tracing::warn!("Delete of sound file {} failed: {e}", sound.id);
                toast.error(e.message_or("Unable to delete sound file."), ToastOptions::new());
            }
        }
        deleting.set(false);
    };

    let body = list_body(&sounds.read(), move |_| load(), |sound_files| {
        rsx! {
            TableAdminSoundFiles {
                sound_files,
                on_delete: move |sound| target.set(Some(sound)),
            }
        }
    });

    rsx! {
        CollapsibleSection {
            title: "Sound Files",
            subtitle: "Upload and manage audio assets",
            toggle_label: "Toggle sound files",
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| upload_open.set(true),
                    "Upload Sound File"
                }
            },
            {body}
        }
        if let Some(sound) = target() {
            ModalConfirmDelete {
                title: "Delete {sound.name}",
                message: "This will permanently remove the sound file.",
                confirm_label: "Delete sound file",
                loading: deleting(),
                on_close: move |_| target.set(None),
                on_confirm,
            }
        }
        if upload_open() {
            ModalUploadSoundFile {
                on_close: move |_| upload_open.set(false),
                on_uploaded: move |_| {
                    load();
                    toast.success("Sound file uploaded.".to_string(), ToastOptions::new());
                },
            }
        }
    }
}

#[component]
fn MeditationsSection() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut meditations = use_signal(|| ListState::<Meditation>::Loading);
    let mut target = use_signal(|| None::<Meditation>);
    let mut deleting = use_signal(|| false);

    let load = move || {
        spawn(async move {
            meditations.set(ListState::Loading);
            let result = api::admin::get_all_mantras(&api.client()).await;
            meditations.set(ListState::from_result(result, "meditations"));
        });
    };
    use_hook(move || load());

    let on_confirm = move |_| async move {
        let Some(meditation) = target() else {
            return;
        };
        deleting.set(true);
        match api::admin::delete_mantra(&api.client(), meditation.id).await {
            Ok(_) => {
                meditations.write().remove_where(|m| m.id == meditation.id);
                toast.success("Meditation deleted.".to_string(), ToastOptions::new());
                target.set(None);
            }
            Err(e) => {
                tracing::warn!("Admin delete of meditation {} failed: {e}", meditation.id);
                toast.error(e.message_or("Unable to delete meditation."), ToastOptions::new());
            }
        }
        deleting.set(false);
    };

    let body = list_body(&meditations.read(), move |_| load(), |meditations| {
        rsx! {
            TableAdminMeditations {
                meditations,
                on_delete: move |meditation| target.set(Some(meditation)),
            }
        }
    });

    rsx! {
        CollapsibleSection {
            title: "Meditations",
            subtitle: "Review all meditation content",
            toggle_label: "Toggle meditations",
            {body}
        }
        if let Some(meditation) = target() {
            ModalConfirmDelete {
                title: "Delete {meditation.title}",
                message: "This will permanently remove the meditation. Admins can delete any meditation.",
                confirm_label: "Delete meditation",
                loading: deleting(),
                on_close: move |_| target.set(None),
                on_confirm,
            }
        }
    }
}

#[component]
fn QueuerSection() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut records = use_signal(|| ListState::<QueueRecord>::Loading);
    let mut target = use_signal(|| None::<QueueRecord>);
    let mut deleting = use_signal(|| false);

    let load = move || {
        spawn(async move {
            records.set(ListState::Loading);
            let result = api::admin::get_queuer_records(&api.client()).await;
            records.set(ListState::from_result(result, "queue records"));
        });
    };
    use_hook(move || load());

    let on_confirm = move |_| async move {
        let Some(record) = target() else {
            return;
        };
        deleting.set(true);
        match api::admin::delete_queuer_record(&api.client(), record.id).await {
            Ok(_) => {
                records.write().remove_where(|r| r.id == record.id);
                toast.success("Queue record deleted.".to_string(), ToastOptions::new());
                target.set(None);
            }
            Err(e) => {
                tracing::warn!("Delete of queue record {} failed: {e}", record.id);
                toast.error(e.message_or("Unable to delete queue record."), ToastOptions::new());
            }
        }
        deleting.set(false);
    };

    let body = list_body(&records.read(), move |_| load(), |records| {
        rsx! {
            TableAdminQueuer {
                records,
                on_delete: move |record| target.set(Some(record)),
            }
        }
    });

    rsx! {
        CollapsibleSection {
            title: "Queuer",
            subtitle: "Monitor queued meditation jobs",
            toggle_label: "Toggle queuer",
            {body}
        }
        if let Some(record) = target() {
            ModalConfirmDelete {
                title: "Delete queue record {record.id}",
                message: "This will remove the queue record but not the meditation itself.",
                confirm_label: "Delete queue record",
                loading: deleting(),
                on_close: move |_| target.set(None),
                on_confirm,
            }
        }
    }
}

#[component]
fn DatabaseSection() -> Element {
    let api = use_api();
    let mut ui = use_ui();
    let toast = use_toast();
    let mut backups = use_signal(|| ListState::<BackupFile>::Loading);
    let mut restore_file = use_signal(|| None::<FileData>);

    let load = move || {
        spawn(async move {
            backups.set(ListState::Loading);
            let result = api::database::get_backups_list(&api.client()).await;
            backups.set(ListState::from_result(result, "backups"));
        });
    };
    use_hook(move || load());

    let on_create = move |_| async move {
        ui.write().show_loading("Creating database backup...");
        match api::database::create_backup(&api.client()).await {
            Ok(created) => {
                tracing::info!("Backup created: {:?}", created.filename);
                load();
                toast.success("Database backup created.".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::warn!("Backup creation failed: {e}");
                toast.error(e.message_or("Unable to create database backup."), ToastOptions::new());
            }
        }
        ui.write().hide_loading();
    };

    let on_download = move |filename: String| async move {
        ui.write().show_loading("Downloading backup...");
        let result = match api::database::download_backup(&api.client(), &filename).await {
            Ok(bytes) => platform::download_bytes(&filename, &bytes, "application/zip")
                .map_err(|message| {
                    tracing::error!("Saving {filename} failed: {message}");
                    "Unable to download backup.".to_string()
                }),
            Err(e) => {
                tracing::warn!("Download of {filename} failed: {e}");
                Err(e.message_or("Unable to download backup."))
            }
        };
        if let Err(message) = result {
            toast.error(message, ToastOptions::new());
        }
        ui.write().hide_loading();
    };

    let on_delete = move |filename: String| async move {
        match api::database::delete_backup(&api.client(), &filename).await {
            Ok(_) => {
                backups.write().remove_where(|b| b.filename == filename);
                toast.success("Backup deleted.".to_string(), ToastOptions::new());
            }
            Err(e) => {
                tracing::warn!("Delete of backup {filename} failed: {e}");
                toast.error(e.message_or("Unable to delete backup."), ToastOptions::new());
            }
        }
    };

    let on_restore = move |_| async move {
        let Some(file) = restore_file() else {
            return;
        };
        if let Err(e) = validate_backup_file(&file.name()) {
            toast.error(e.to_string(), ToastOptions::new());
            return;
        }
        ui.write().show_loading("Restoring database...");
        let result = match read_upload(&file).await {
            Ok(archive) => api::database::replenish_database(&api.client(), archive)
                .await
                .map_err(|e| {
                    tracing::warn!("Database restore failed: {e}");
                    e.message_or("Unable to restore database.")
                }),
            Err(message) => Err(message),
        };
        match result {
            Ok(summary) => {
                restore_file.set(None);
                platform::clear_file_input(RESTORE_INPUT_ID);
                toast.success(
                    format!(
                        "Database restored. {} tables, {} rows.",
                        summary.tables_imported, summary.total_rows
                    ),
                    ToastOptions::new(),
                );
                load();
            }
            Err(message) => toast.error(message, ToastOptions::new()),
        }
        ui.write().hide_loading();
    };

    let selected_name = restore_file().map(|f| f.name());
    let body = list_body(&backups.read(), move |_| load(), |backups| {
        rsx! {
            TableAdminDatabase { backups, on_download, on_delete }
            div { class: "restore-panel",
                div { class: "restore-row",
                    div {
                        p { class: "cell-strong", "Upload Backup (.zip)" }
                        p { class: "field-hint",
                            {selected_name.clone().unwrap_or_else(|| "No file selected".to_string())}
                        }
                    }
                    div { class: "restore-actions",
                        label { class: "pill-button",
                            "Choose File"
                            input {
                                id: RESTORE_INPUT_ID,
                                class: "visually-hidden",
                                r#type: "file",
                                accept: ".zip",
                                onchange: move |evt: FormEvent| restore_file.set(picked_file(&evt)),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            disabled: selected_name.is_none(),
                            onclick: on_restore,
                            "Restore Database"
                        }
                    }
                }
                p { class: "restore-warning", "⚠️ Warning: Restoring will replace all current data" }
            }
        }
    });

    rsx! {
        CollapsibleSection {
            title: "Database",
            subtitle: "Backup and restore database",
            toggle_label: "Toggle database backups",
            actions: rsx! {
                Button { variant: ButtonVariant::Outline, onclick: on_create, "Create Backup" }
            },
            {body}
        }
    }
}
