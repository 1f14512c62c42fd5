//! Service error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::SummaryId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "Summary not found",
///     "details": "no summary with id 999999"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details, e.g. the offending field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                  |
/// |-----------|------------|------------------------------|
/// | 1000–1999 | Validation | 422 Unprocessable Entity     |
/// | 2000–2999 | Not Found  | 404 Not Found                |
/// | 3000–3999 | Server     | 500 Internal Server Error    |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed to parse or validate.
    #[error("invalid request payload: {0}")]
    InvalidPayload(String),

    /// Path id is not a positive integer.
    #[error("invalid summary id: {0}")]
    InvalidSummaryId(String),

    /// No record with the given id exists.
    #[error("summary not found: {0}")]
    SummaryNotFound(SummaryId),

    /// No route matches the request path.
    #[error("no route for {0}")]
    RouteNotFound(String),

    /// Storage layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidPayload(_) => 1001,
            Self::InvalidSummaryId(_) => 1002,
            Self::SummaryNotFound(_) => 2001,
            Self::RouteNotFound(_) => 2002,
            Self::Persistence(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::InvalidSummaryId(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::SummaryNotFound(_) | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Splits the error into the client-facing message and details.
    ///
    /// Storage failures never leak their cause to the client.
    fn public_parts(&self) -> (&'static str, Option<String>) {
        match self {
            Self::InvalidPayload(detail) => ("invalid request payload", Some(detail.clone())),
            Self::InvalidSummaryId(detail) => ("invalid summary id", Some(detail.clone())),
            Self::SummaryNotFound(id) => (
                "Summary not found",
                Some(format!("no summary with id {id}")),
            ),
            Self::RouteNotFound(path) => ("route not found", Some(path.clone())),
            Self::Persistence(_) => ("internal server error", None),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let (message, details) = self.public_parts();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: message.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
