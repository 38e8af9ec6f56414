use crate::application::auth::RequiredIdentity;
use crate::application::http::food_log::validators::CreateLogValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::dates::parse_date;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use gutcheck_core::domain::food_log::entities::FoodLog;
use gutcheck_core::domain::food_log::ports::FoodLogService;
use gutcheck_core::domain::food_log::value_objects::{CreateFoodLogInput, SymptomEntryInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateLogResponse {
    pub data: FoodLog,
}

#[utoipa::path(
    post,
    path = "",
    tag = "log",
    summary = "Create log",
    description = "Records a meal with its ingredients and the symptoms that followed. Ingredient names resolve to canonical ingredients.",
    responses(
        (status = 201, body = CreateLogResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Unknown or repeated symptom")
    ),
    request_body = CreateLogValidator
)]
pub async fn create_log(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateLogValidator>,
) -> Result<Response<CreateLogResponse>, ApiError> {
    let log_date = parse_date("log_date", &payload.log_date)?;

    let log = state
        .service
        .create_log(
            identity,
            CreateFoodLogInput {
                log_date,
                notes: payload.notes,
                ingredients: payload.ingredients,
                symptoms: payload
                    .symptoms
                    .into_iter()
                    .map(|s| SymptomEntryInput {
                        symptom_id: s.symptom_id,
                        severity: s.severity,
                    })
                    .collect(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateLogResponse { data: log }))
}
