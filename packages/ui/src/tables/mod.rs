//! # Tables and the collapsible sections that host them
//!
//! | Component | Shows |
//! |-----------|-------|
//! | [`TableMeditation`] | The public library, with playback, favorites and owner deletes |
//! | [`TableAdminUsers`] | Registered accounts |
//! | [`TableAdminSoundFiles`] | Uploaded sound files |
//! | [`TableAdminMeditations`] | Every meditation, public or private |
//! | [`TableAdminQueuer`] | Render jobs and their pipeline status |
//! | [`TableAdminDatabase`] | Backup archives |
//!
//! Admin tables are presentational: rows in, delete callbacks out. Loading
//! and error states live in [`ListState`] and are rendered by the section
//! that owns the fetch.

use api::ApiError;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronUp, FaTrash};
use dioxus_free_icons::Icon;

use crate::messages::fetch_error;

mod admin_database;
mod admin_meditations;
mod admin_queuer;
mod admin_sounds;
mod admin_users;
mod meditation;

pub use admin_database::TableAdminDatabase;
pub use admin_meditations::TableAdminMeditations;
pub use admin_queuer::TableAdminQueuer;
pub use admin_sounds::TableAdminSoundFiles;
pub use admin_users::TableAdminUsers;
pub use meditation::TableMeditation;

/// Lifecycle of a fetched list.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

impl<T> ListState<T> {
    /// `subject` names the rows in the error text, e.g. `"users"`.
    pub fn from_result(result: Result<Vec<T>, ApiError>, subject: &str) -> Self {
        match result {
            Ok(items) => ListState::Ready(items),
            Err(e) => {
                tracing::warn!("Loading {subject} failed: {e}");
                ListState::Failed(fetch_error(&e, subject))
            }
        }
    }

    /// Drop loaded rows matching `predicate`. No-op unless ready.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) {
        if let ListState::Ready(items) = self {
            items.retain(|item| !predicate(item));
        }
    }
}

/// Card with a header that toggles its body.
#[component]
pub fn CollapsibleSection(
    title: String,
    subtitle: Option<String>,
    #[props(default)] expanded: bool,
    toggle_label: String,
    /// Buttons placed next to the toggle.
    actions: Option<Element>,
    children: Element,
) -> Element {
    let mut open = use_signal(|| expanded);

    rsx! {
        section { class: "card",
            div { class: "card-header",
                div {
                    h2 { class: "card-title", "{title}" }
                    if let Some(subtitle) = subtitle {
                        p { class: "card-subtitle", "{subtitle}" }
                    }
                }
                div { class: "card-actions",
                    if let Some(actions) = actions {
                        {actions}
                    }
                    button {
                        class: "icon-button",
                        r#type: "button",
                        aria_expanded: "{open}",
                        aria_label: "{toggle_label}",
                        onclick: move |_| open.toggle(),
                        if open() {
                            Icon { icon: FaChevronUp, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaChevronDown, width: 14, height: 14 }
                        }
                    }
                }
            }
            if open() {
                div { class: "card-body", {children} }
            }
        }
    }
}

#[component]
pub fn SkeletonRows(count: usize) -> Element {
    rsx! {
        div { class: "skeleton-stack",
            for index in 0..count {
                div { key: "{index}", class: "skeleton-row" }
            }
        }
    }
}

#[component]
pub fn FetchError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "fetch-error",
            p { "{message}" }
            button {
                class: "pill-button",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

/// Red "Delete" pill used in the last column of every table.
#[component]
pub fn DeleteButton(aria_label: String, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "pill-button pill-danger",
            r#type: "button",
            aria_label: "{aria_label}",
            onclick: move |_| on_click.call(()),
            Icon { icon: FaTrash, width: 12, height: 12 }
            " Delete"
        }
    }
}

#[component]
pub(crate) fn EmptyRow(colspan: usize, message: String) -> Element {
    rsx! {
        tr {
            td { class: "table-empty", colspan: "{colspan}", "{message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_from_result() {
        let ok: ListState<u32> = ListState::from_result(Ok(vec![1, 2]), "users");
        assert_eq!(ok, ListState::Ready(vec![1, 2]));

        let denied: ListState<u32> = ListState::from_result(
            Err(ApiError::Status {
                status: 403,
                message: None,
            }),
            "sound files",
        );
        assert_eq!(
            denied,
            ListState::Failed("You do not have permission to view sound files.".to_string())
        );
    }

    #[test]
    fn test_remove_where_only_touches_ready_lists() {
        let mut ready = ListState::Ready(vec![1, 2, 3]);
        ready.remove_where(|n| *n == 2);
        assert_eq!(ready, ListState::Ready(vec![1, 3]));

        let mut loading: ListState<u32> = ListState::Loading;
        loading.remove_where(|_| true);
        assert_eq!(loading, ListState::Loading);
    }
}
