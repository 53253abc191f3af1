use dioxus::prelude::*;
use store::SoundFile;

use super::{DeleteButton, EmptyRow};

#[component]
pub fn TableAdminSoundFiles(sound_files: Vec<SoundFile>, on_delete: EventHandler<SoundFile>) -> Element {
    rsx! {
        div { class: "table-scroll",
            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { class: "text-right", "Delete" }
                    }
                }
                tbody {
                    if sound_files.is_empty() {
                        EmptyRow { colspan: 3, message: "No sound files found." }
                    }
                    for sound in sound_files {
                        tr { key: "{sound.id}",
                            td { class: "cell-strong", "{sound.id}" }
                            td {
                                "{sound.name}"
                                if let Some(description) = sound.description.clone() {
                                    p { class: "cell-muted", "{description}" }
                                }
                            }
                            td { class: "text-right",
                                DeleteButton {
                                    aria_label: format!("Delete sound file {}", sound.name),
                                    on_click: {
                                        let sound = sound.clone();
                                        move |_| on_delete.call(sound.clone())
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
