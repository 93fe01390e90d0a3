//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::CategoryError;

/// Errors emitted while loading the category catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CategoryError),
}

/// Errors emitted by a `SessionHandle`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DriverError {
    #[error("session driver has stopped")]
    Closed,
}
