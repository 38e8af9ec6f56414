use crate::application::auth::RequiredIdentity;
use crate::application::http::food_log::validators::GetLogsQuery;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateQuery};
use crate::application::http::server::api_entities::dates::parse_date;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use gutcheck_core::domain::food_log::entities::FoodLog;
use gutcheck_core::domain::food_log::ports::FoodLogService;
use gutcheck_core::domain::food_log::value_objects::{
    DEFAULT_PER_PAGE, GetFoodLogsFilter, Pagination,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetLogsResponse {
    pub data: Vec<FoodLog>,
    pub pagination: Pagination,
}

#[utoipa::path(
    get,
    path = "",
    tag = "log",
    summary = "Get logs",
    description = "Lists the caller's logs, newest first, optionally limited to a date range.",
    params(GetLogsQuery),
    responses(
        (status = 200, body = GetLogsResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Missing or invalid token")
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateQuery(query): ValidateQuery<GetLogsQuery>,
) -> Result<Response<GetLogsResponse>, ApiError> {
    let start_date = query
        .start_date
        .as_deref()
        .map(|d| parse_date("start_date", d))
        .transpose()?;
    let end_date = query
        .end_date
        .as_deref()
        .map(|d| parse_date("end_date", d))
        .transpose()?;

    let page = state
        .service
        .get_logs(
            identity,
            GetFoodLogsFilter {
                start_date,
                end_date,
                page: query.page.unwrap_or(1),
                per_page: query.per_page.unwrap_or(DEFAULT_PER_PAGE),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetLogsResponse {
        data: page.data,
        pagination: page.pagination,
    }))
}
