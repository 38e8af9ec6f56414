use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateQuery};
use crate::application::http::server::api_entities::dates::parse_date;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::trigger_analysis::validators::GetTriggersQuery;
use axum::extract::State;
use chrono::NaiveDate;
use gutcheck_core::domain::trigger_analysis::entities::{
    CorrelationRow, TriggerAnalysis, TriggerAnalysisMeta, TriggerResult,
};
use gutcheck_core::domain::trigger_analysis::ports::TriggerAnalysisService;
use gutcheck_core::domain::trigger_analysis::value_objects::{
    DEFAULT_TRIGGER_LIMIT, GetTopTriggersInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalysisPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_logs: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTriggersResponse {
    pub triggers: Vec<TriggerResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlations: Option<Vec<CorrelationRow>>,
    pub analysis_period: AnalysisPeriod,
    pub meta: TriggerAnalysisMeta,
}

impl From<TriggerAnalysis> for GetTriggersResponse {
    fn from(analysis: TriggerAnalysis) -> Self {
        Self {
            analysis_period: AnalysisPeriod {
                start_date: analysis.meta.date_range.start_date,
                end_date: analysis.meta.date_range.end_date,
                total_logs: analysis.meta.total_logs,
            },
            triggers: analysis.triggers,
            correlations: analysis.correlations,
            meta: analysis.meta,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "trigger",
    summary = "Get top triggers",
    description = "Ranks the caller's ingredients by how much worse their symptoms are on days the ingredient was eaten, compared to their overall baseline.",
    params(GetTriggersQuery),
    responses(
        (status = 200, body = GetTriggersResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Backend failure")
    ),
)]
pub async fn get_triggers(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateQuery(query): ValidateQuery<GetTriggersQuery>,
) -> Result<Response<GetTriggersResponse>, ApiError> {
    let input = GetTopTriggersInput {
        start_date: parse_date("start_date", &query.start_date)?,
        end_date: parse_date("end_date", &query.end_date)?,
        limit: query.limit.unwrap_or(DEFAULT_TRIGGER_LIMIT),
        detailed: query.detailed.unwrap_or(false),
    };

    let analysis = state
        .service
        .get_top_triggers(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTriggersResponse::from(analysis)))
}
