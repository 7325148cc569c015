//! Card Grid Component
//!
//! One clickable card per recipe in the active language.

use dioxus::prelude::*;
use recipe_gallery_core::{render_cards, CardView, Language, Recipe};

use crate::context::use_gallery;

/// Recipe card grid.
///
/// Cards are fully rebuilt from `recipes` on every render.
#[component]
pub fn CardGrid(
    /// Loaded recipes, in display order
    recipes: Vec<Recipe>,
    /// Language to label the cards in
    language: Language,
) -> Element {
    let cards = render_cards(&recipes, language);

    rsx! {
        for card in cards {
            RecipeCard { key: "{card.id}", card: card.clone() }
        }
    }
}

/// A single card. Registers its element so the modal can hand focus back
/// to it on close, and unregisters once it leaves the grid.
#[component]
fn RecipeCard(card: CardView) -> Element {
    let ctx = use_gallery();
    let id = use_hook(|| card.id.clone());
    use_drop(move || ctx.unregister_card(&id));

    let click_id = card.id.clone();
    let mount_id = card.id.clone();

    rsx! {
        button {
            class: "card",
            r#type: "button",
            "aria-label": "{card.title}",
            onmounted: move |evt| ctx.register_card(mount_id.clone(), evt.data()),
            onclick: move |_| ctx.open_recipe(&click_id),

            div { class: "thumb",
                img {
                    src: "{card.thumbnail}",
                    alt: "{card.alt}",
                    decoding: "async",
                    loading: "lazy",
                }
            }
            div { class: "card-info",
                div { class: "title", "{card.title}" }
                div { class: "desc", "{card.description}" }
                div { class: "sub", "{card.cta}" }
            }
        }
    }
}
