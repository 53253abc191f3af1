use dioxus::prelude::*;
use store::format::format_date_time;
use store::AdminUser;

use super::{DeleteButton, EmptyRow};

/// The current admin's own row has no delete button.
#[component]
pub fn TableAdminUsers(
    users: Vec<AdminUser>,
    current_user_id: Option<u64>,
    on_delete: EventHandler<AdminUser>,
) -> Element {
    rsx! {
        div { class: "table-scroll",
            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Email" }
                        th { "Username" }
                        th { "Verified" }
                        th { "Admin" }
                        th { "Public" }
                        th { "Created" }
                        th { class: "text-right", "Delete" }
                    }
                }
                tbody {
                    if users.is_empty() {
                        EmptyRow { colspan: 8, message: "No users found." }
                    }
                    for user in users {
                        tr { key: "{user.id}",
                            td { class: "cell-strong", "{user.id}" }
                            td { "{user.email}" }
                            td { {user.username.clone().unwrap_or_else(|| "—".to_string())} }
                            td { if user.is_email_verified { "Yes" } else { "No" } }
                            td { if user.is_admin { "Yes" } else { "No" } }
                            td { if user.has_public_mantras { "Yes" } else { "No" } }
                            td { class: "cell-muted", {format_date_time(&user.created_at)} }
                            td { class: "text-right",
                                if Some(user.id) != current_user_id {
                                    DeleteButton {
                                        aria_label: format!("Delete user {}", user.email),
                                        on_click: {
                                            let user = user.clone();
                                            move |_| on_delete.call(user.clone())
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
}
