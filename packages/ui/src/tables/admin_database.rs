use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaDownload;
use dioxus_free_icons::Icon;
use store::format::{format_date_time, format_file_size};
use store::BackupFile;

use super::{DeleteButton, EmptyRow};

#[component]
pub fn TableAdminDatabase(
    backups: Vec<BackupFile>,
    on_download: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "table-scroll",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Filename" }
                        th { "Size" }
                        th { "Created" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    if backups.is_empty() {
                        EmptyRow { colspan: 4, message: "No backups found." }
                    }
                    for backup in backups {
                        tr { key: "{backup.filename}",
                            td { class: "cell-strong", "{backup.filename}" }
                            td { {backup.size.map(format_file_size).unwrap_or_else(|| "—".to_string())} }
                            td { class: "cell-muted",
                                {backup.created_at.as_deref().map(format_date_time).unwrap_or_else(|| "—".to_string())}
                            }
                            td { class: "text-right table-actions",
                                button {
                                    class: "pill-button",
                                    r#type: "button",
                                    aria_label: "Download backup {backup.filename}",
                                    onclick: {
                                        let filename = backup.filename.clone();
                                        move |_| on_download.call(filename.clone())
                                    },
                                    Icon { icon: FaDownload, width: 12, height: 12 }
                                    " Download"
                                }
                                DeleteButton {
                                    aria_label: format!("Delete backup {}", backup.filename),
                                    on_click: {
                                        let filename = backup.filename.clone();
                                        move |_| on_delete.call(filename.clone())
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
