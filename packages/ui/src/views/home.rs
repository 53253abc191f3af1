use dioxus::prelude::*;

use crate::forms::CreateMeditationForm;
use crate::tables::TableMeditation;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "container",
            section { class: "hero",
                h1 { class: "hero-title", "Welcome to Mantrify" }
                p { class: "hero-text",
                    "Create personalized lightly guided meditations that combine purposeful affirmations with contemplative silences"
                }
            }
            CreateMeditationForm {}
            TableMeditation {}
        }
    }
}
