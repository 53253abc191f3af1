use dioxus::prelude::*;
use store::format::{format_date_time, format_queue_status};
use store::{QueueRecord, QueueStatus};

use super::{DeleteButton, EmptyRow};

fn status_class(status: &QueueStatus) -> &'static str {
    match status {
        QueueStatus::Queued => "badge badge-queued",
        QueueStatus::Started => "badge badge-started",
        QueueStatus::ElevenLabs => "badge badge-elevenlabs",
        QueueStatus::Concatenator => "badge badge-concatenator",
        QueueStatus::Done => "badge badge-done",
        QueueStatus::Other(_) => "badge",
    }
}

#[component]
pub fn TableAdminQueuer(records: Vec<QueueRecord>, on_delete: EventHandler<QueueRecord>) -> Element {
    rsx! {
        div { class: "table-scroll",
            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "User ID" }
                        th { "Status" }
                        th { "Job Filename" }
                        th { "Created" }
                        th { class: "text-right", "Delete" }
                    }
                }
                tbody {
                    if records.is_empty() {
                        EmptyRow { colspan: 6, message: "No queue records found." }
                    }
                    for record in records {
                        tr { key: "{record.id}",
                            td { class: "cell-strong", "{record.id}" }
                            td { "{record.user_id}" }
                            td {
                                span { class: status_class(&record.status), {format_queue_status(&record.status)} }
                            }
                            td { "{record.job_filename}" }
                            td { class: "cell-muted", {format_date_time(&record.created_at)} }
                            td { class: "text-right",
                                DeleteButton {
                                    aria_label: format!("Delete queue record {}", record.id),
                                    on_click: {
                                        let record = record.clone();
                                        move |_| on_delete.call(record.clone())
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
