use super::handlers::create_log::{__path_create_log, create_log};
use super::handlers::get_log::{__path_get_log, get_log};
use super::handlers::get_logs::{__path_get_logs, get_logs};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_log, get_logs, get_log))]
pub struct FoodLogApiDoc;

pub fn food_log_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/logs", state.args.server.root_path),
            post(create_log),
        )
        .route(
            &format!("{}/logs", state.args.server.root_path),
            get(get_logs),
        )
        .route(
            &format!("{}/logs/{{log_id}}", state.args.server.root_path),
            get(get_log),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
