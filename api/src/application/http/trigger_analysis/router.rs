use super::handlers::get_triggers::{__path_get_triggers, get_triggers};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_triggers))]
pub struct TriggerAnalysisApiDoc;

pub fn trigger_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/triggers", state.args.server.root_path),
            get(get_triggers),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
