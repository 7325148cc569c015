//! Gallery header: localized title, language selector and theme toggle.

use dioxus::prelude::*;
use recipe_gallery_core::{Language, Theme, UiText};

use super::UiLabel;
use crate::context::use_gallery;

/// Page header.
///
/// Changing the language redraws the cards and every static string; the
/// choice is persisted right away.
#[component]
pub fn GalleryHeader() -> Element {
    let ctx = use_gallery();
    let lang = (ctx.language)();
    let theme = (ctx.theme)();

    let theme_label = match theme {
        Theme::Light => UiText::ThemeLight.text(lang),
        Theme::Dark => UiText::ThemeDark.text(lang),
    };

    rsx! {
        header { class: "gallery-header",
            div { class: "gallery-header__text",
                h1 { class: "gallery-title", UiLabel { path: "header.title" } }
                p { class: "gallery-subtitle", UiLabel { path: "header.subtitle" } }
            }

            div { class: "gallery-header__controls",
                select {
                    id: "language-select",
                    "aria-label": "Language",
                    value: "{lang.code()}",
                    onchange: move |evt| match evt.value().parse::<Language>() {
                        Ok(language) => ctx.set_language(language),
                        Err(e) => tracing::warn!("{}", e),
                    },
                    for option_lang in Language::ALL {
                        option {
                            key: "{option_lang.code()}",
                            value: "{option_lang.code()}",
                            selected: option_lang == lang,
                            "{option_lang.native_name()}"
                        }
                    }
                }

                button {
                    id: "theme-toggle",
                    class: "theme-toggle",
                    r#type: "button",
                    onclick: move |_| ctx.toggle_theme(),
                    "{theme_label}"
                }
            }
        }
    }
}
