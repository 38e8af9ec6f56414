use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use gutcheck_core::domain::health::entities::DatabaseHealthStatus;
use gutcheck_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadyResponse {
    pub status: String,
    pub database: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Checks the database round trip.",
    responses(
        (status = 200, body = ReadyResponse),
        (status = 503, description = "Database unreachable")
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<ReadyResponse>, ApiError> {
    let database = state.service.readness().await.map_err(ApiError::from)?;

    if let Some(error) = &database.error {
        return Err(ApiError::ServiceUnavailable(format!(
            "database not ready: {error}"
        )));
    }

    Ok(Response::OK(ReadyResponse {
        status: "ready".to_string(),
        database,
    }))
}
