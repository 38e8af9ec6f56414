use crate::application::http::{
    food_log::router::FoodLogApiDoc, health::router::HealthApiDoc,
    ingredient::router::IngredientApiDoc, symptom::router::SymptomApiDoc,
    trigger_analysis::router::TriggerAnalysisApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gutcheck API"
    ),
    nest(
        (path = "/logs", api = FoodLogApiDoc),
        (path = "/triggers", api = TriggerAnalysisApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/symptoms", api = SymptomApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
