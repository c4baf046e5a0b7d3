//! Error types for the catalog proxy.

use thiserror::Error;

/// Errors that can occur when talking to the external music catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No API credential available; a hard configuration error, not a
    /// retryable condition
    #[error("Catalog API key not configured")]
    MissingApiKey,

    /// Invalid catalog base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to construct the HTTP client
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream call failed or returned a non-success response. The
    /// underlying cause is logged, not carried here.
    #[error("Music catalog is unavailable")]
    Unavailable,

    /// Failed to parse a catalog response
    #[error("Failed to parse catalog response: {0}")]
    Parse(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
