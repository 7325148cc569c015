//! Text bound to a translation path.

use dioxus::prelude::*;
use recipe_gallery_core::translate_path;

use crate::context::use_gallery;

/// Inline text looked up by dot path in the active language. An unknown
/// path renders nothing.
#[component]
pub fn UiLabel(path: &'static str) -> Element {
    let ctx = use_gallery();
    let text = translate_path(path, (ctx.language)()).unwrap_or_default();

    rsx! {
        span { "data-i18n": path, "{text}" }
    }
}
