//! Error types for the antd-docs library

use thiserror::Error;

/// Result type alias for antd-docs operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Errors that can occur while loading the catalog or searching it
#[derive(Debug, Error)]
pub enum DocsError {
    /// The catalog request could not be completed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The catalog server answered with a failure status
    #[error("Transport error: HTTP {status} fetching {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    /// A local catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog payload is not a JSON array of components
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),
    /// The embedding capability failed
    #[error("Embedding error: {0}")]
    Embedding(String),
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}
