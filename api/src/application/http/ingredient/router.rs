use super::handlers::get_ingredients::{__path_get_ingredients, get_ingredients};
use super::handlers::normalize_ingredient::{__path_normalize_ingredient, normalize_ingredient};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_ingredients, normalize_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            get(get_ingredients),
        )
        .route(
            &format!("{}/ingredients/normalize", state.args.server.root_path),
            post(normalize_ingredient),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
