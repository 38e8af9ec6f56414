use tracing::{info, instrument};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    catalog::ports::{IngredientRepository, SymptomRepository},
    common::{entities::app_errors::CoreError, services::Service},
    food_log::ports::FoodLogRepository,
    health::ports::HealthCheckRepository,
    ingredient_normalization::ports::LLMClient,
    trigger_analysis::{
        entities::TriggerAnalysis,
        ports::{LogSnapshotRepository, TriggerAnalysisService},
        scoring::TriggerScorer,
        value_objects::GetTopTriggersInput,
    },
};

impl<L, I, S, T, A, LLM, HC> TriggerAnalysisService for Service<L, I, S, T, A, LLM, HC>
where
    L: FoodLogRepository,
    I: IngredientRepository,
    S: SymptomRepository,
    T: LogSnapshotRepository,
    A: TokenVerifier,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn get_top_triggers(
        &self,
        identity: Identity,
        input: GetTopTriggersInput,
    ) -> Result<TriggerAnalysis, CoreError> {
        let range = input.validate()?;

        let observations = self
            .log_snapshot_repository
            .fetch_observations(identity.id(), range)
            .await?;

        let analysis = TriggerScorer::new(self.analysis_config).score(
            &observations,
            range,
            input.limit as usize,
            input.detailed,
        );

        info!(
            total_logs = analysis.meta.total_logs,
            triggers = analysis.triggers.len(),
            "trigger analysis computed"
        );

        Ok(analysis)
    }
}
