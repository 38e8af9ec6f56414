use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::server::api_entities::dates::validate_iso_date;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SymptomEntryValidator {
    pub symptom_id: Uuid,

    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub severity: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLogValidator {
    #[validate(custom(function = "validate_iso_date"))]
    #[schema(example = "2026-01-08")]
    pub log_date: String,

    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    #[serde(default)]
    pub notes: Option<String>,

    #[validate(length(max = 50, message = "must contain at most 50 entries"))]
    #[serde(default)]
    pub ingredients: Vec<String>,

    #[validate(nested, length(max = 20, message = "must contain at most 20 entries"))]
    #[serde(default)]
    pub symptoms: Vec<SymptomEntryValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetLogsQuery {
    #[validate(custom(function = "validate_iso_date"))]
    pub start_date: Option<String>,

    #[validate(custom(function = "validate_iso_date"))]
    pub end_date: Option<String>,

    #[validate(range(min = 1, message = "must be at least 1"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub per_page: Option<u32>,
}
