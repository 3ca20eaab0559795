//! Upstream error definitions.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, timeout, or body decode failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status.
    #[error("upstream returned HTTP {0}")]
    Status(StatusCode),

    /// The configured base URL could not be parsed.
    #[error("invalid upstream base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
