//! Runtime configuration.

use std::path::PathBuf;

use reqwest::Url;

/// Default location of the recipe data file.
pub const DEFAULT_DATA_URL: &str = "data/recipes.json";

/// Where the recipe data file is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched with a single unauthenticated GET
    Http(Url),
    /// Read from the local filesystem
    File(PathBuf),
}

impl DataSource {
    /// `http`/`https` URLs become [`DataSource::Http`]; everything else is
    /// treated as a filesystem path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Http(url),
            _ => DataSource::File(PathBuf::from(raw)),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_URL))
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Http(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Gallery settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub data_source: DataSource,
    /// Render a user-facing error block when loading fails
    pub inline_errors: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::default(),
            inline_errors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_remote() {
        let source = DataSource::parse("https://example.com/data/recipes.json");
        assert!(matches!(source, DataSource::Http(_)));
    }

    #[test]
    fn relative_paths_are_files() {
        assert_eq!(
            DataSource::parse("data/recipes.json"),
            DataSource::File(PathBuf::from("data/recipes.json"))
        );
    }

    #[test]
    fn other_schemes_are_files() {
        assert!(matches!(DataSource::parse("C:/recipes.json"), DataSource::File(_)));
    }
}
