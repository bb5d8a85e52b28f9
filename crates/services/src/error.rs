//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, SourceLocationError};
use storage::sqlite::SqliteInitError;

/// Errors emitted while fetching and preparing questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question source returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("question payload is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidRecord(#[from] QuestionError),
}

/// Errors emitted when a quiz session cannot start.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available")]
    Empty,
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    SourceLocation(#[from] SourceLocationError),
}
