//! Preference persistence using redb.
//!
//! Two scalar preferences survive across sessions: the UI language and the
//! color theme. They are read once at startup and written on every change.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::{GalleryError, GalleryResult};
use crate::i18n::Language;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Color theme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute and the stored preference.
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Theme {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(GalleryError::InvalidPreference {
                key: THEME_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Startup preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

/// Key-value preference store backed by a redb file.
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<RwLock<Database>>,
}

impl PreferenceStore {
    /// Open or create the store at `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Stored value for `key`, or `default` when nothing is stored.
    pub fn get_preference(&self, key: &str, default: &str) -> GalleryResult<String> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(match table.get(key)? {
            Some(value) => value.value().to_string(),
            None => default.to_string(),
        })
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set_preference(&self, key: &str, value: &str) -> GalleryResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Read both preferences. Unrecognised stored values fall back to the
    /// defaults instead of failing startup.
    pub fn load_preferences(&self) -> GalleryResult<Preferences> {
        let defaults = Preferences::default();
        let language = self.get_typed(LANGUAGE_KEY, defaults.language.code(), defaults.language)?;
        let theme = self.get_typed(THEME_KEY, defaults.theme.code(), defaults.theme)?;
        Ok(Preferences { language, theme })
    }

    pub fn save_language(&self, language: Language) -> GalleryResult<()> {
        self.set_preference(LANGUAGE_KEY, language.code())
    }

    pub fn save_theme(&self, theme: Theme) -> GalleryResult<()> {
        self.set_preference(THEME_KEY, theme.code())
    }

    fn get_typed<T>(&self, key: &str, default_code: &str, default: T) -> GalleryResult<T>
    where
        T: FromStr<Err = GalleryError>,
    {
        let raw = self.get_preference(key, default_code)?;
        Ok(raw.parse().unwrap_or_else(|err| {
            tracing::warn!("Ignoring stored preference: {}", err);
            default
        }))
    }
}
