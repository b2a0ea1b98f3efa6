//! Shared error types for the services crate.

use thiserror::Error;

use lingo_core::model::Language;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressStore` writes.
///
/// Reads never fail: unreadable data loads as a fresh record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode progress record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Refused session transitions. State is left untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("username cannot be empty")]
    EmptyUsername,
    #[error("already logged in as {0}")]
    AlreadyLoggedIn(String),
    #[error("not logged in")]
    NotLoggedIn,
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("no deck available for {0}")]
    UnsupportedLanguage(Language),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
