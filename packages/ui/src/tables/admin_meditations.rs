use dioxus::prelude::*;
use store::format::format_date_time;
use store::Meditation;

use super::{DeleteButton, EmptyRow};

#[component]
pub fn TableAdminMeditations(meditations: Vec<Meditation>, on_delete: EventHandler<Meditation>) -> Element {
    rsx! {
        div { class: "table-scroll",
            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Title" }
                        th { "Visibility" }
                        th { "Owner" }
                        th { "Listens" }
                        th { "Created" }
                        th { class: "text-right", "Delete" }
                    }
                }
                tbody {
                    if meditations.is_empty() {
                        EmptyRow { colspan: 7, message: "No meditations found." }
                    }
                    for meditation in meditations {
                        tr { key: "{meditation.id}",
                            td { class: "cell-strong", "{meditation.id}" }
                            td { "{meditation.title}" }
                            td {
                                span {
                                    class: if meditation.is_public() { "badge badge-public" } else { "badge badge-private" },
                                    if meditation.is_public() { "Public" } else { "Private" }
                                }
                            }
                            td {
                                {meditation.owner_user_id.map(|id| id.to_string()).unwrap_or_else(|| "—".to_string())}
                            }
                            td { "{meditation.listen_count}" }
                            td { class: "cell-muted", {format_date_time(&meditation.created_at)} }
                            td { class: "text-right",
                                DeleteButton {
                                    aria_label: format!("Delete meditation {}", meditation.title),
                                    on_click: {
                                        let meditation = meditation.clone();
                                        move |_| on_delete.call(meditation.clone())
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
