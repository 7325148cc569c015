//! Inline error shown in place of the gallery when loading fails.

use dioxus::prelude::*;

use super::UiLabel;

#[component]
pub fn InlineError() -> Element {
    rsx! {
        div { class: "error-box", role: "alert",
            strong { UiLabel { path: "errors.loadFailedTitle" } }
            br {}
            UiLabel { path: "errors.loadFailedHint" }
        }
    }
}
