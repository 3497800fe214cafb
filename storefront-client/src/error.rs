//! Client error types
//!
//! Only construction can fail with [`ClientError`]. Remote calls report
//! failures as [`shared::DomainError`].

use thiserror::Error;

/// Client construction error
#[derive(Debug, Error)]
pub enum ClientError {
    /// reqwest client could not be built (TLS backend, invalid header, ...)
    #[error("HTTP client build failed: {0}")]
    Build(#[from] reqwest::Error),

    /// Base URL is not an absolute http(s) URL
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Result type for client construction
pub type ClientResult<T> = Result<T, ClientError>;
