//! Summary CRUD handlers: create, list, read, update, delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    SummaryCreatedResponse, SummaryPayload, SummaryResponse, SummaryUpdatePayload,
};
use crate::api::extract::ValidJson;
use crate::app_state::AppState;
use crate::domain::SummaryId;
use crate::error::{ApiError, ErrorResponse};

/// `POST /summaries/` — Register a URL for summarization.
///
/// # Errors
///
/// Returns [`ApiError::InvalidPayload`] on an invalid body and
/// [`ApiError::Persistence`] on storage failure.
#[utoipa::path(
    post,
    path = "/summaries/",
    tag = "Summaries",
    summary = "Create a summary record",
    description = "Stores the URL with an empty summary and returns the new record id.",
    request_body = SummaryPayload,
    responses(
        (status = 201, description = "Record created", body = SummaryCreatedResponse),
        (status = 422, description = "Invalid payload", body = ErrorResponse),
    )
)]
pub async fn create_summary(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<SummaryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.store.create(&payload.url).await?;
    tracing::info!(%id, url = %payload.url, "summary created");

    let response = SummaryCreatedResponse {
        id,
        url: payload.url.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /summaries/{id}/` — Fetch one record.
///
/// # Errors
///
/// Returns [`ApiError::SummaryNotFound`] if no record has this id.
#[utoipa::path(
    get,
    path = "/summaries/{id}/",
    tag = "Summaries",
    summary = "Get a summary record",
    params(
        ("id" = i64, Path, description = "Record id, greater than 0"),
    ),
    responses(
        (status = 200, description = "Record found", body = SummaryResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 422, description = "Invalid id", body = ErrorResponse),
    )
)]
pub async fn read_summary(
    State(state): State<AppState>,
    id: SummaryId,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .store
        .read(id)
        .await?
        .ok_or(ApiError::SummaryNotFound(id))?;
    Ok(Json(SummaryResponse::from(record)))
}

/// `GET /summaries/` — List every record in creation order.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on storage failure.
#[utoipa::path(
    get,
    path = "/summaries/",
    tag = "Summaries",
    summary = "List summary records",
    responses(
        (status = 200, description = "All records, possibly empty", body = Vec<SummaryResponse>),
    )
)]
pub async fn read_all_summaries(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.store.read_all().await?;
    let data: Vec<SummaryResponse> = records.into_iter().map(SummaryResponse::from).collect();
    Ok(Json(data))
}

/// `PUT /summaries/{id}/` — Replace a record's URL and summary.
///
/// # Errors
///
/// Returns [`ApiError::SummaryNotFound`] if no record has this id and
/// [`ApiError::InvalidPayload`] on an invalid body.
#[utoipa::path(
    put,
    path = "/summaries/{id}/",
    tag = "Summaries",
    summary = "Update a summary record",
    description = "Overwrites both `url` and `summary`; `created_at` is preserved.",
    params(
        ("id" = i64, Path, description = "Record id, greater than 0"),
    ),
    request_body = SummaryUpdatePayload,
    responses(
        (status = 200, description = "Updated record", body = SummaryResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 422, description = "Invalid id or payload", body = ErrorResponse),
    )
)]
pub async fn update_summary(
    State(state): State<AppState>,
    id: SummaryId,
    ValidJson(payload): ValidJson<SummaryUpdatePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .store
        .update(id, &payload.url, &payload.summary)
        .await?
        .ok_or(ApiError::SummaryNotFound(id))?;
    tracing::info!(%id, "summary updated");
    Ok(Json(SummaryResponse::from(record)))
}

/// `DELETE /summaries/{id}/` — Remove a record.
///
/// Responds with the record as it was just before deletion.
///
/// # Errors
///
/// Returns [`ApiError::SummaryNotFound`] if no record has this id.
#[utoipa::path(
    delete,
    path = "/summaries/{id}/",
    tag = "Summaries",
    summary = "Delete a summary record",
    params(
        ("id" = i64, Path, description = "Record id, greater than 0"),
    ),
    responses(
        (status = 200, description = "Deleted record", body = SummaryResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 422, description = "Invalid id", body = ErrorResponse),
    )
)]
pub async fn delete_summary(
    State(state): State<AppState>,
    id: SummaryId,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .store
        .delete(id)
        .await?
        .ok_or(ApiError::SummaryNotFound(id))?;
    tracing::info!(%id, "summary deleted");
    Ok(Json(SummaryResponse::from(record)))
}

/// Summary resource routes, all under `/summaries` with a trailing slash.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summaries/", post(create_summary).get(read_all_summaries))
        .route(
            "/summaries/{id}/",
            get(read_summary).put(update_summary).delete(delete_summary),
        )
}
