//! Upstream response envelope.
//!
//! Every upstream endpoint wraps its payload in a generic
//! `{data, status, error}` envelope; `data` is null when the request
//! succeeded but nothing matched.

use serde::Deserialize;

/// Generic wrapper around upstream payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload; `None` when the upstream has no data for the request.
    pub data: Option<T>,

    /// Human-readable status message.
    #[serde(default)]
    pub status: Option<String>,

    /// Error description, populated on upstream-side failures.
    #[serde(default)]
    pub error: Option<String>,
}
