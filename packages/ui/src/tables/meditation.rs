use dioxus::prelude::*;
use store::Meditation;

use super::{CollapsibleSection, EmptyRow, FetchError, SkeletonRows};
use crate::audio_player::AudioPlayer;
use crate::components::{use_toast, ToastOptions};
use crate::messages::delete_meditation_error;
use crate::modals::{ModalConfirmDelete, ModalMeditationDetails};
use crate::providers::{use_api, use_auth, use_meditations};

/// The meditation library. Reloads whenever the session changes so private
/// meditations appear after login and vanish after logout.
#[component]
pub fn TableMeditation() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut meditations = use_meditations();
    let toast = use_toast();
    let mut delete_target = use_signal(|| None::<(u64, String)>);
    let mut deleting = use_signal(|| false);
    let mut details = use_signal(|| None::<Meditation>);

    let fetch = move || {
        spawn(async move {
            let include_private = auth.peek().is_authenticated;
            let generation = meditations.write().begin_fetch();
            let result = api::mantras::get_all_mantras(&api.client(), include_private)
                .await
                .map_err(|e| {
                    tracing::warn!("Loading meditations failed: {e}");
                    e.message_or("Unable to load meditations. Please try again.")
                });
            if !meditations.write().finish_fetch(generation, result) {
                tracing::debug!("Dropped stale meditation list {generation}");
            }
        });
    };

    use_effect(move || {
        let _session = auth.read().is_authenticated;
        fetch();
    });

    let on_toggle_favorite = move |id: u64| async move {
        if !auth.peek().is_authenticated {
            return;
        }
        let Some(pending) = meditations.write().begin_favorite_toggle(id) else {
            return;
        };
        if let Err(e) = api::mantras::favorite_mantra(&api.client(), id, pending.next).await {
            tracing::warn!("Favorite toggle for {id} failed, rolling back: {e}");
            meditations.write().rollback_favorite(pending);
        }
    };

    let on_confirm_delete = move |_| async move {
        let Some((id, _)) = delete_target() else {
            return;
        };
        deleting.set(true);
        match api::mantras::delete_mantra(&api.client(), id).await {
            Ok(_) => {
                meditations.write().delete_meditation(id);
                toast.success("Meditation deleted.".to_string(), ToastOptions::new());
                delete_target.set(None);
            }
            Err(e) => {
                tracing::warn!("Delete of meditation {id} failed: {e}");
                toast.error(delete_meditation_error(&e), ToastOptions::new());
            }
        }
        deleting.set(false);
    };

    let is_authenticated = auth.read().is_authenticated;
    let columns = if is_authenticated { 5 } else { 3 };
    let (loading, error, rows) = {
        let state = meditations.read();
        let rows: Vec<Meditation> = state
            .visible_rows(is_authenticated)
            .into_iter()
            .cloned()
            .collect();
        (state.loading, state.error.clone(), rows)
    };

    let body = if loading {
        rsx! { SkeletonRows { count: 5 } }
    } else if let Some(error) = error {
        rsx! { FetchError { message: error, on_retry: move |_| fetch() } }
    } else {
        rsx! {
            div { class: "table-scroll",
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Play" }
                            if is_authenticated {
                                th { "Favorite" }
                            }
                            th { "Listens" }
                            if is_authenticated {
                                th { class: "text-right", "Delete" }
                            }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            EmptyRow { colspan: columns, message: "No meditations available yet." }
                        }
                        for meditation in rows {
                            tr { key: "{meditation.id}",
                                td {
                                    button {
                                        class: "link-button cell-strong",
                                        r#type: "button",
                                        onclick: {
                                            let meditation = meditation.clone();
                                            move |_| details.set(Some(meditation.clone()))
                                        },
                                        "{meditation.title}"
                                    }
                                }
                                td {
                                    AudioPlayer { mantra_id: meditation.id, title: meditation.title.clone() }
                                }
                                if is_authenticated {
                                    td {
                                        FavoriteButton {
                                            title: meditation.title.clone(),
                                            favorite: meditation.is_favorite(),
                                            on_toggle: {
                                                let id = meditation.id;
                                                move |_| on_toggle_favorite(id)
                                            },
                                        }
                                    }
                                }
                                td { "{meditation.listen_count}" }
                                if is_authenticated {
                                    td { class: "text-right",
                                        if meditation.is_owned() {
                                            button {
                                                class: "pill-button pill-danger",
                                                r#type: "button",
                                                onclick: {
                                                    let target = (meditation.id, meditation.title.clone());
                                                    move |_| delete_target.set(Some(target.clone()))
                                                },
                                                "Delete"
                                            }
                                        } else {
                                            span { class: "cell-muted", "—" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        CollapsibleSection {
            title: "Meditations",
            subtitle: "Explore the community library",
            expanded: true,
            toggle_label: "Toggle meditations",
            {body}
        }
        if let Some((_, title)) = delete_target() {
            ModalConfirmDelete {
                title: "Delete {title}",
                message: "This will permanently remove this meditation from your library.",
                confirm_label: "Delete meditation",
                loading: deleting(),
                on_close: move |_| delete_target.set(None),
                on_confirm: on_confirm_delete,
            }
        }
        if let Some(meditation) = details() {
            ModalMeditationDetails { meditation, on_close: move |_| details.set(None) }
        }
    }
}

#[component]
fn FavoriteButton(title: String, favorite: bool, on_toggle: EventHandler<()>) -> Element {
    let label = if favorite {
        format!("Remove {title} from favorites")
    } else {
        format!("Add {title} to favorites")
    };
    rsx! {
        button {
            class: if favorite { "favorite-button favorite-on" } else { "favorite-button" },
            r#type: "button",
            aria_label: "{label}",
            aria_pressed: "{favorite}",
            onclick: move |_| on_toggle.call(()),
            "★"
        }
    }
}
