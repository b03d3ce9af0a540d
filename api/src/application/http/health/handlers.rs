use axum::extract::State;
use recipelens_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct LivenessResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn health_live() -> Result<Response<LivenessResponse>, ApiError> {
    Ok(Response::OK(LivenessResponse {
        status: "ok".to_string(),
    }))
}

/// The model is loaded before the server binds, so a running server is ready.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports the loaded model and the size of the recipe catalog.",
    responses(
        (status = 200, body = ReadinessStatus)
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<ReadinessStatus>, ApiError> {
    Ok(Response::OK(state.service.readiness()))
}
