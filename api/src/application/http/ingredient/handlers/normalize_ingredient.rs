use crate::application::auth::RequiredIdentity;
use crate::application::http::ingredient::validators::NormalizeIngredientValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use gutcheck_core::domain::ingredient_normalization::entities::NormalizedMatch;
use gutcheck_core::domain::ingredient_normalization::ports::IngredientNormalizationService;
use gutcheck_core::domain::ingredient_normalization::value_objects::NormalizeIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NormalizeIngredientResponse {
    pub data: Vec<NormalizedMatch>,
    pub raw_text: String,
}

#[utoipa::path(
    post,
    path = "/normalize",
    tag = "ingredient",
    summary = "Normalize ingredient",
    description = "Resolves free text to canonical ingredients, trying exact names and aliases, then fuzzy matching, then the language model when configured.",
    responses(
        (status = 200, body = NormalizeIngredientResponse),
        (status = 400, description = "Empty or overly long text"),
        (status = 422, description = "No canonical ingredient matches")
    ),
    request_body = NormalizeIngredientValidator
)]
pub async fn normalize_ingredient(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<NormalizeIngredientValidator>,
) -> Result<Response<NormalizeIngredientResponse>, ApiError> {
    let result = state
        .service
        .normalize_ingredient(
            identity,
            NormalizeIngredientInput {
                raw_text: payload.raw_text,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NormalizeIngredientResponse {
        data: result.matches,
        raw_text: result.raw_text,
    }))
}
