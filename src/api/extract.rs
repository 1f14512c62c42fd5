//! Request extractors that reject with [`ApiError`] instead of Axum's
//! plain-text rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use crate::domain::SummaryId;
use crate::error::ApiError;

/// JSON body extractor whose failures become [`ApiError::InvalidPayload`].
///
/// Field-level validation lives in the payload types themselves (see
/// [`crate::domain::SummaryUrl`]), so a successful extraction means the
/// body is fully valid.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection.body_text())
    }
}

impl<S> FromRequestParts<S> for SummaryId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidSummaryId(rejection.body_text()))?;
        Self::try_from_raw(raw)
    }
}
