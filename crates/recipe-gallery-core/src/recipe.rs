//! Recipe records as they appear in the data file.
//!
//! Recipes are read-only after load. Every field except `id` is optional in
//! the JSON and falls back to an empty value when absent or `null`, so a
//! partially filled record still renders.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::i18n::Language;

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A value translated per language code, with English as the fallback.
///
/// A `null` translation counts as missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized<T>(HashMap<String, Option<T>>);

impl<T> Localized<T> {
    /// Value for `lang`, else the English value, else `None`.
    pub fn get(&self, lang: Language) -> Option<&T> {
        self.lookup(lang.code())
            .or_else(|| self.lookup(Language::En.code()))
    }

    fn lookup(&self, code: &str) -> Option<&T> {
        self.0.get(code).and_then(Option::as_ref)
    }
}

impl<T> FromIterator<(Language, T)> for Localized<T> {
    fn from_iter<I: IntoIterator<Item = (Language, T)>>(iter: I) -> Self {
        Localized(
            iter.into_iter()
                .map(|(lang, value)| (lang.code().to_string(), Some(value)))
                .collect(),
        )
    }
}

/// A place where the dish can be tried.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Map link
    #[serde(default)]
    pub link: Option<String>,
}

/// A localized dish record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: Localized<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: Localized<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alt: Localized<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Legacy single-image field, used when `images` is empty
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Localized<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Localized<Vec<String>>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
}

impl Recipe {
    pub fn title(&self, lang: Language) -> &str {
        self.title.get(lang).map(String::as_str).unwrap_or("")
    }

    pub fn description(&self, lang: Language) -> &str {
        self.description.get(lang).map(String::as_str).unwrap_or("")
    }

    /// Alt text for the images; falls back to the title.
    pub fn alt(&self, lang: Language) -> &str {
        match self.alt.get(lang) {
            Some(alt) => alt,
            None => self.title(lang),
        }
    }

    pub fn ingredients(&self, lang: Language) -> &[String] {
        self.ingredients.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn steps(&self, lang: Language) -> &[String] {
        self.steps.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Images shown in the modal carousel.
    ///
    /// The `images` list when it has entries, otherwise the legacy `image`
    /// field. Blank entries are dropped.
    pub fn gallery_images(&self) -> Vec<String> {
        let source: Vec<&String> = if self.images.is_empty() {
            self.image.iter().collect()
        } else {
            self.images.iter().collect()
        };
        source
            .into_iter()
            .filter(|url| !url.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Card thumbnail: the first carousel image, else empty.
    pub fn thumbnail(&self) -> String {
        self.gallery_images().into_iter().next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        serde_json::from_str(
            r#"{
                "id": "ramen",
                "title": { "en": "Ramen", "ro": "Ramen RO" },
                "description": { "en": "Noodle soup" },
                "images": ["a.jpg", "b.jpg"],
                "ingredients": { "en": ["noodles", "broth"], "ru": ["лапша"] },
                "steps": { "en": ["boil"] }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn per_field_english_fallback() {
        let recipe = sample();
        assert_eq!(recipe.title(Language::Ro), "Ramen RO");
        assert_eq!(recipe.title(Language::Ru), "Ramen");
        assert_eq!(recipe.description(Language::Ro), "Noodle soup");
        assert_eq!(recipe.ingredients(Language::Ru), ["лапша"]);
        assert_eq!(recipe.ingredients(Language::Ro), ["noodles", "broth"]);
    }

    #[test]
    fn alt_falls_back_to_title() {
        let recipe = sample();
        assert_eq!(recipe.alt(Language::Ro), "Ramen RO");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let recipe: Recipe = serde_json::from_str(r#"{ "id": "bare" }"#).unwrap();
        assert_eq!(recipe.title(Language::En), "");
        assert!(recipe.steps(Language::En).is_empty());
        assert!(recipe.gallery_images().is_empty());
        assert_eq!(recipe.thumbnail(), "");
        assert!(recipe.locations.is_empty());
    }

    #[test]
    fn legacy_image_used_when_list_empty() {
        let recipe: Recipe =
            serde_json::from_str(r#"{ "id": "x", "images": [], "image": "a.jpg" }"#).unwrap();
        assert_eq!(recipe.gallery_images(), vec!["a.jpg".to_string()]);
        assert_eq!(recipe.thumbnail(), "a.jpg");
    }

    #[test]
    fn blank_images_are_dropped() {
        let recipe: Recipe =
            serde_json::from_str(r#"{ "id": "x", "images": ["", "b.jpg"] }"#).unwrap();
        assert_eq!(recipe.gallery_images(), vec!["b.jpg".to_string()]);
        assert_eq!(recipe.thumbnail(), "b.jpg");
    }

    #[test]
    fn null_fields_fall_back_like_missing_ones() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "id": "x",
                "title": { "en": "Tempura", "ro": null },
                "description": null,
                "images": null,
                "image": "legacy.jpg",
                "ingredients": { "en": ["shrimp"], "ru": null },
                "steps": null,
                "video": null,
                "locations": null
            }"#,
        )
        .unwrap();
        assert_eq!(recipe.title(Language::Ro), "Tempura");
        assert_eq!(recipe.description(Language::En), "");
        assert_eq!(recipe.gallery_images(), vec!["legacy.jpg".to_string()]);
        assert_eq!(recipe.ingredients(Language::Ru), ["shrimp"]);
        assert!(recipe.steps(Language::Ro).is_empty());
        assert!(recipe.video.is_none());
        assert!(recipe.locations.is_empty());
    }

    #[test]
    fn null_location_name_is_blank() {
        let loc: Location =
            serde_json::from_str(r#"{ "name": null, "address": null }"#).unwrap();
        assert_eq!(loc.name, "");
        assert!(loc.address.is_none());
    }

    #[test]
    fn location_optional_fields() {
        let loc: Location = serde_json::from_str(r#"{ "name": "Ichiran" }"#).unwrap();
        assert_eq!(loc.name, "Ichiran");
        assert!(loc.address.is_none());
        assert!(loc.website.is_none());
        assert!(loc.link.is_none());
    }
}
