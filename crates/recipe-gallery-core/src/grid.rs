//! Card grid projection.

use crate::i18n::{Language, UiText};
use crate::recipe::Recipe;

/// One clickable card in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub alt: String,
    pub thumbnail: String,
    pub cta: &'static str,
}

impl CardView {
    pub fn project(recipe: &Recipe, lang: Language) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title(lang).to_string(),
            description: recipe.description(lang).to_string(),
            alt: recipe.alt(lang).to_string(),
            thumbnail: recipe.thumbnail(),
            cta: UiText::CardCta.text(lang),
        }
    }
}

/// Build the full card list for `lang`.
///
/// The result replaces whatever was drawn before; there is no diffing
/// against a previous call.
pub fn render_cards(recipes: &[Recipe], lang: Language) -> Vec<CardView> {
    recipes
        .iter()
        .map(|recipe| CardView::project(recipe, lang))
        .collect()
}
