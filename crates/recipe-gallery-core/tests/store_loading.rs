//! Loading tests for the recipe store and preference persistence
//!
//! Covers local files, a real HTTP round trip against a throwaway listener,
//! and redb-backed preferences surviving a reopen.

use std::path::PathBuf;

use recipe_gallery_core::{
    DataSource, Language, LoadError, PreferenceStore, Preferences, RecipeStore, Theme,
};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response and return the URL to fetch.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/data/recipes.json")
}

#[tokio::test]
async fn test_load_sample_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/recipes.json");
    let store = RecipeStore::load(&DataSource::File(path)).await.unwrap();
    assert!(!store.is_empty());
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let source = DataSource::File(dir.path().join("absent.json"));
    let err = RecipeStore::load(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[tokio::test]
async fn test_object_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.json");
    std::fs::write(&path, r#"{"id":"x"}"#).unwrap();
    let err = RecipeStore::load(&DataSource::File(path)).await.unwrap_err();
    assert!(matches!(err, LoadError::NotAnArray));
}

#[tokio::test]
async fn test_http_404_is_status_error() {
    let url = serve_once("404 Not Found", "").await;
    let err = RecipeStore::load(&DataSource::parse(&url)).await.unwrap_err();
    assert!(matches!(err, LoadError::Status(404)));
}

#[tokio::test]
async fn test_http_success() {
    let url = serve_once("200 OK", r#"[{"id":"onigiri","title":{"en":"Onigiri"}}]"#).await;
    let store = RecipeStore::load(&DataSource::parse(&url)).await.unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.recipes()[0].title(Language::En), "Onigiri");
}

#[test]
fn test_preferences_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.redb");

    {
        let prefs = PreferenceStore::new(&path).unwrap();
        prefs.save_language(Language::Ru).unwrap();
        prefs.save_theme(Theme::Light).unwrap();
    }

    let prefs = PreferenceStore::new(&path).unwrap();
    assert_eq!(
        prefs.load_preferences().unwrap(),
        Preferences {
            language: Language::Ru,
            theme: Theme::Light,
        }
    );
}
