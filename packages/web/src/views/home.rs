use dioxus::prelude::*;

use ui::views::HomeView;

#[component]
pub fn Home() -> Element {
    rsx! { HomeView {} }
}
