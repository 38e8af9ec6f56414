use crate::domain::{
    ingredient_normalization::value_objects::NormalizationConfig,
    trigger_analysis::value_objects::TriggerAnalysisConfig,
};

/// Application service shared by every use case.
///
/// Each domain module implements its service trait on this struct, reaching only for the
/// ports it needs. Generic parameters, in order: food log repository, ingredient
/// repository, symptom repository, log snapshot repository, token verifier, LLM client,
/// health check repository.
#[derive(Clone)]
pub struct Service<L, I, S, T, A, LLM, HC> {
    pub(crate) food_log_repository: L,
    pub(crate) ingredient_repository: I,
    pub(crate) symptom_repository: S,
    pub(crate) log_snapshot_repository: T,
    pub(crate) token_verifier: A,
    pub(crate) llm_client: Option<LLM>,
    pub(crate) health_check_repository: HC,
    pub(crate) analysis_config: TriggerAnalysisConfig,
    pub(crate) normalization_config: NormalizationConfig,
}

impl<L, I, S, T, A, LLM, HC> Service<L, I, S, T, A, LLM, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        food_log_repository: L,
        ingredient_repository: I,
        symptom_repository: S,
        log_snapshot_repository: T,
        token_verifier: A,
        llm_client: Option<LLM>,
        health_check_repository: HC,
        analysis_config: TriggerAnalysisConfig,
        normalization_config: NormalizationConfig,
    ) -> Self {
        Self {
            food_log_repository,
            ingredient_repository,
            symptom_repository,
            log_snapshot_repository,
            token_verifier,
            llm_client,
            health_check_repository,
            analysis_config,
            normalization_config,
        }
    }

    pub fn analysis_config(&self) -> &TriggerAnalysisConfig {
        &self.analysis_config
    }
}
