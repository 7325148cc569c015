//! Recipe store: the in-memory list loaded once from the data file.

use reqwest::Url;
use serde_json::Value;

use crate::config::DataSource;
use crate::error::LoadError;
use crate::recipe::Recipe;

/// Result of looking a recipe up by identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Recipe),
    NotFound,
}

/// Read-only recipe list for the page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load recipes from `source`. One attempt, no retries.
    pub async fn load(source: &DataSource) -> Result<Self, LoadError> {
        let body = match source {
            DataSource::Http(url) => fetch(url).await?,
            DataSource::File(path) => tokio::fs::read(path).await?,
        };
        let store = Self::parse(&body)?;
        tracing::debug!(count = store.len(), %source, "Loaded recipes");
        Ok(store)
    }

    /// Parse a data file body. The top level must be an array.
    pub fn parse(body: &[u8]) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_array() {
            return Err(LoadError::NotAnArray);
        }
        let recipes: Vec<Recipe> = serde_json::from_value(value)?;
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Find a recipe by identifier.
    pub fn find(&self, id: &str) -> Lookup<'_> {
        match self.recipes.iter().find(|recipe| recipe.id == id) {
            Some(recipe) => Lookup::Found(recipe),
            None => Lookup::NotFound,
        }
    }
}

async fn fetch(url: &Url) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::get(url.clone()).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_array_of_recipes() {
        let store = RecipeStore::parse(br#"[{"id":"a"},{"id":"b"}]"#).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.recipes()[1].id, "b");
    }

    #[test]
    fn parse_rejects_object_top_level() {
        let err = RecipeStore::parse(br#"{"recipes":[]}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = RecipeStore::parse(b"<html>404</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn empty_array_is_valid() {
        let store = RecipeStore::parse(b"[]").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn find_reports_not_found() {
        let store = RecipeStore::parse(br#"[{"id":"a"}]"#).unwrap();
        assert!(matches!(store.find("a"), Lookup::Found(r) if r.id == "a"));
        assert_eq!(store.find("zzz"), Lookup::NotFound);
    }
}
