//! Localization table.
//!
//! Every piece of static UI text is a [`UiText`] variant, and every variant
//! carries a string for each [`Language`]. Lookups are total: there is no
//! runtime path traversal that can silently miss.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Languages the gallery is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, also the fallback for untranslated recipe fields
    #[default]
    En,
    /// Romanian
    Ro,
    /// Russian
    Ru,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 3] = [Language::En, Language::Ro, Language::Ru];

    /// Language code used in recipe data and the preference store.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ro => "ro",
            Language::Ru => "ru",
        }
    }

    /// Human-readable name shown in the language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ro => "Română",
            Language::Ru => "Русский",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ro" => Ok(Language::Ro),
            "ru" => Ok(Language::Ru),
            other => Err(GalleryError::InvalidPreference {
                key: "language".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Keys for static UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiText {
    HeaderTitle,
    HeaderSubtitle,
    ModalClose,
    ModalIngredients,
    ModalSteps,
    ModalWatchVideo,
    ModalLocations,
    CardCta,
    NoRestaurantData,
    LoadFailedTitle,
    LoadFailedHint,
    VisitWebsite,
    ViewOnMap,
    AddressUnavailable,
    ThemeLight,
    ThemeDark,
}

impl UiText {
    pub const ALL: [UiText; 16] = [
        UiText::HeaderTitle,
        UiText::HeaderSubtitle,
        UiText::ModalClose,
        UiText::ModalIngredients,
        UiText::ModalSteps,
        UiText::ModalWatchVideo,
        UiText::ModalLocations,
        UiText::CardCta,
        UiText::NoRestaurantData,
        UiText::LoadFailedTitle,
        UiText::LoadFailedHint,
        UiText::VisitWebsite,
        UiText::ViewOnMap,
        UiText::AddressUnavailable,
        UiText::ThemeLight,
        UiText::ThemeDark,
    ];

    /// Resolve this key for `lang`.
    pub fn text(&self, lang: Language) -> &'static str {
        let [en, ro, ru] = self.entries();
        match lang {
            Language::En => en,
            Language::Ro => ro,
            Language::Ru => ru,
        }
    }

    /// Dot-separated path used by markup tagged for text binding.
    pub fn path(&self) -> &'static str {
        match self {
            UiText::HeaderTitle => "header.title",
            UiText::HeaderSubtitle => "header.subtitle",
            UiText::ModalClose => "modal.close",
            UiText::ModalIngredients => "modal.ingredients",
            UiText::ModalSteps => "modal.steps",
            UiText::ModalWatchVideo => "modal.watchVideo",
            UiText::ModalLocations => "modal.locations",
            UiText::CardCta => "cards.cta",
            UiText::NoRestaurantData => "cards.noRestaurantData",
            UiText::LoadFailedTitle => "errors.loadFailedTitle",
            UiText::LoadFailedHint => "errors.loadFailedHint",
            UiText::VisitWebsite => "locations.website",
            UiText::ViewOnMap => "locations.map",
            UiText::AddressUnavailable => "locations.addressUnavailable",
            UiText::ThemeLight => "theme.light",
            UiText::ThemeDark => "theme.dark",
        }
    }

    /// Look up a key by its dot path. Unknown paths yield `None`, and the
    /// caller keeps whatever text the element already has.
    pub fn from_path(path: &str) -> Option<UiText> {
        UiText::ALL.into_iter().find(|key| key.path() == path)
    }

    // [en, ro, ru]
    fn entries(&self) -> [&'static str; 3] {
        match self {
            UiText::HeaderTitle => ["日本の味覚", "Gusturile Japoniei", "Вкусы Японии"],
            UiText::HeaderSubtitle => [
                "Discover the art, harmony, and authentic tastes of Japanese cuisine",
                "Descoperă arta, armonia și gusturile autentice ale bucătăriei japoneze",
                "Откройте искусство, гармонию и подлинные вкусы японской кухни",
            ],
            UiText::ModalClose => ["✕", "✕", "✕"],
            UiText::ModalIngredients => ["Ingredients", "Ingrediente", "Ингредиенты"],
            UiText::ModalSteps => ["Steps", "Pași", "Шаги"],
            UiText::ModalWatchVideo => [
                "Watch how it's made:",
                "Vezi cum se prepară:",
                "Смотрите, как это готовится:",
            ],
            UiText::ModalLocations => ["Where to Try It", "Unde Poți Gusta", "Где Попробовать"],
            UiText::CardCta => ["Click to view", "Apasă pentru a vedea", "Нажмите для просмотра"],
            UiText::NoRestaurantData => [
                "No restaurant data available.",
                "Nu sunt date disponibile.",
                "Нет данных о ресторанах.",
            ],
            UiText::LoadFailedTitle => [
                "Couldn't load recipes.",
                "Nu am putut încărca rețetele.",
                "Не удалось загрузить рецепты.",
            ],
            UiText::LoadFailedHint => [
                "If you opened this file directly, start a local server. Otherwise check data/recipes.json.",
                "Dacă ai deschis fișierul direct, pornește un server local. Altfel verifică data/recipes.json.",
                "Если вы открыли файл напрямую, запустите локальный сервер. Иначе проверьте data/recipes.json.",
            ],
            UiText::VisitWebsite => ["Visit Website", "Vizitează site-ul", "Посетить сайт"],
            UiText::ViewOnMap => ["View on Map", "Vezi pe hartă", "Посмотреть на карте"],
            UiText::AddressUnavailable => [
                "Address not available",
                "Adresă indisponibilă",
                "Адрес недоступен",
            ],
            UiText::ThemeLight => ["🌞 Light Mode", "🌞 Mod luminos", "🌞 Светлая тема"],
            UiText::ThemeDark => ["🌙 Dark Mode", "🌙 Mod întunecat", "🌙 Тёмная тема"],
        }
    }
}

/// Resolve a dot path for `lang`, or `None` when the path is unknown.
pub fn translate_path(path: &str, lang: Language) -> Option<&'static str> {
    UiText::from_path(path).map(|key| key.text(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(matches!(err, GalleryError::InvalidPreference { .. }));
    }

    #[test]
    fn every_key_has_every_language() {
        for key in UiText::ALL {
            for lang in Language::ALL {
                assert!(!key.text(lang).is_empty(), "{key:?} missing {lang}");
            }
        }
    }

    #[test]
    fn paths_are_unique_and_resolve_back() {
        for key in UiText::ALL {
            assert_eq!(UiText::from_path(key.path()), Some(key));
        }
    }

    #[test]
    fn unknown_path_leaves_text_untouched() {
        assert_eq!(translate_path("modal.nope", Language::Ro), None);
        assert_eq!(translate_path("", Language::En), None);
        assert_eq!(translate_path("modal.steps", Language::Ro), Some("Pași"));
    }

    #[test]
    fn labelled_markup_paths_resolve() {
        let paths = [
            "header.title",
            "header.subtitle",
            "modal.ingredients",
            "modal.steps",
            "modal.watchVideo",
            "modal.locations",
            "errors.loadFailedTitle",
            "errors.loadFailedHint",
        ];
        for lang in Language::ALL {
            for path in paths {
                assert!(translate_path(path, lang).is_some(), "{path} missing {lang}");
            }
        }
        assert_eq!(translate_path("header.title", Language::Ru), Some("Вкусы Японии"));
    }

    #[test]
    fn load_failed_title_in_english() {
        assert_eq!(UiText::LoadFailedTitle.text(Language::En), "Couldn't load recipes.");
    }
}
