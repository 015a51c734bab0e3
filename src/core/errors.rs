//! Error types for brickset
//!
//! This module defines the errors that can surface while loading
//! a record collection or turning query text into a query.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying a repository
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid query: {0}")]
    Query(String),
}

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;
