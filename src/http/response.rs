//! Response handling and transformation.
//!
//! # Responsibilities
//! - Map service results and upstream errors to HTTP status codes
//! - Keep the status mapping in one place, out of the handlers
//!
//! # Design Decisions
//! - Absence (empty list, unknown id, unconfirmed delete) is 404
//! - An upstream create without a confirmed record is 500
//! - Transport/protocol failures toward the upstream are 502

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::upstream::UpstreamError;

/// Errors a façade handler can produce.
#[derive(Debug)]
pub enum ApiError {
    /// The requested resource does not exist (or the list is empty).
    NotFound,

    /// The upstream accepted a create but returned no record.
    CreateFailed,

    /// Talking to the upstream failed outright.
    Upstream(UpstreamError),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::CreateFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Employee creation failed").into_response()
            }
            ApiError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
            }
        }
    }
}
