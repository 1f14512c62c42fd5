//! System endpoints: liveness ping.

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Ping response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    /// Always `"pong!"`.
    pub ping: String,
    /// Configured deployment environment.
    pub environment: String,
    /// Whether the service runs under a test harness.
    pub testing: bool,
}

/// `GET /ping` — Liveness check.
#[utoipa::path(
    get,
    path = "/ping",
    tag = "System",
    summary = "Ping",
    description = "Returns a fixed pong along with the configured environment and testing flag.",
    responses(
        (status = 200, description = "Service is up", body = PingResponse),
    )
)]
pub async fn ping_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(PingResponse {
            ping: "pong!".to_string(),
            environment: state.environment.to_string(),
            testing: state.testing,
        }),
    )
}

/// Router fallback: unmatched paths get the standard JSON error body.
///
/// Summary routes require the trailing slash, so `/summaries` and
/// `/summaries/1` land here.
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("{method} {}", uri.path()))
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping_handler))
}
