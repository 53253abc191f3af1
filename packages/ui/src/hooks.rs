use dioxus::prelude::*;

use crate::platform;

/// Hide body overflow for as long as the calling component is mounted.
pub fn use_body_scroll_lock() {
    let original = use_hook(platform::lock_body_scroll);
    use_drop(move || platform::restore_body_scroll(original));
}
