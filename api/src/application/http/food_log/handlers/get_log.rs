use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use gutcheck_core::domain::food_log::entities::FoodLog;
use gutcheck_core::domain::food_log::ports::FoodLogService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetLogResponse {
    pub data: FoodLog,
}

#[utoipa::path(
    get,
    path = "/{log_id}",
    tag = "log",
    summary = "Get log",
    params(
        ("log_id" = Uuid, Path, description = "Log ID"),
    ),
    responses(
        (status = 200, body = GetLogResponse),
        (status = 404, description = "Log not found")
    ),
)]
pub async fn get_log(
    Path(log_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetLogResponse>, ApiError> {
    let log = state
        .service
        .get_log(identity, log_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLogResponse { data: log }))
}
