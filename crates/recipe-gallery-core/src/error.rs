//! Error types for Recipe Gallery

use thiserror::Error;

/// Failure while loading the recipe data file.
///
/// Every variant is recovered by the application as an inline error block;
/// none of them is fatal to the page.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The transport answered with a non-success status
    #[error("HTTP {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Reading a local data file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The body is not valid JSON, or a record has the wrong shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an array
    #[error("Invalid data shape: expected an array")]
    NotAnArray,
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None => LoadError::Transport(err.to_string()),
        }
    }
}

/// Main error type for Recipe Gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Recipe data could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Error during preference storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored or requested preference value is not recognised
    #[error("Invalid value for preference '{key}': {value}")]
    InvalidPreference { key: String, value: String },
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
