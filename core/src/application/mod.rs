use tracing::info;

use crate::{
    domain::common::{GutcheckConfig, services::Service},
    infrastructure::{
        auth::jwt_verifier::JwtTokenVerifier,
        catalog::repositories::{
            ingredient_repository::PostgresIngredientRepository,
            symptom_repository::PostgresSymptomRepository,
        },
        db::postgres::Postgres,
        food_log::repositories::food_log_repository::PostgresFoodLogRepository,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        llm::gemini_client::GeminiLLMClient,
        trigger_analysis::repositories::log_snapshot_repository::PostgresLogSnapshotRepository,
    },
};

pub type GutcheckService = Service<
    PostgresFoodLogRepository,
    PostgresIngredientRepository,
    PostgresSymptomRepository,
    PostgresLogSnapshotRepository,
    JwtTokenVerifier,
    GeminiLLMClient,
    PostgresHealthCheckRepository,
>;

/// Wires the Postgres-backed repositories, token verifier and optional LLM client.
pub async fn create_service(config: GutcheckConfig) -> Result<GutcheckService, anyhow::Error> {
    config.analysis.validate()?;
    config.normalization.validate()?;

    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    let llm_client = if config.llm.is_enabled() {
        info!(model = %config.llm.gemini_model, "LLM ingredient matching enabled");
        Some(GeminiLLMClient::new(&config.llm)?)
    } else {
        info!("LLM ingredient matching disabled");
        None
    };

    Ok(Service::new(
        PostgresFoodLogRepository::new(db.clone()),
        PostgresIngredientRepository::new(db.clone()),
        PostgresSymptomRepository::new(db.clone()),
        PostgresLogSnapshotRepository::new(db.clone()),
        JwtTokenVerifier::new(&config.auth),
        llm_client,
        PostgresHealthCheckRepository::new(db),
        config.analysis,
        config.normalization,
    ))
}
