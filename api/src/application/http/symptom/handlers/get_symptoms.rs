use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use gutcheck_core::domain::catalog::entities::Symptom;
use gutcheck_core::domain::catalog::ports::CatalogService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomsResponse {
    pub data: Vec<Symptom>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "symptom",
    summary = "Get symptoms",
    description = "Lists the symptoms a log can record, ordered by name.",
    responses(
        (status = 200, body = GetSymptomsResponse)
    ),
)]
pub async fn get_symptoms(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetSymptomsResponse>, ApiError> {
    let symptoms = state
        .service
        .get_symptoms(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSymptomsResponse { data: symptoms }))
}
