//! Error types for wikitables-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wikitables-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No article matched the requested title
    #[error("no matching article for '{0}'")]
    ArticleNotFound(String),

    /// No table at the requested index
    #[error("no table '{0}'")]
    TableNotFound(String),

    /// A template could not be evaluated
    #[error("failed to evaluate template '{name}': {message}")]
    Template { name: String, message: String },

    /// A table header was assigned something other than a list of names
    #[error("invalid table head: {0}")]
    InvalidHead(String),

    /// Reader options failed validation
    #[error("invalid reader options: {0}")]
    InvalidOptions(String),

    /// CSV writing error from the csv crate
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn template(name: &str, message: impl Into<String>) -> Self {
        Error::Template {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
