use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    catalog::{
        entities::{Ingredient, Symptom},
        ports::{CatalogService, IngredientRepository, SymptomRepository},
    },
    common::{entities::app_errors::CoreError, services::Service},
    food_log::ports::FoodLogRepository,
    health::ports::HealthCheckRepository,
    ingredient_normalization::ports::LLMClient,
    trigger_analysis::ports::LogSnapshotRepository,
};

impl<L, I, S, T, A, LLM, HC> CatalogService for Service<L, I, S, T, A, LLM, HC>
where
    L: FoodLogRepository,
    I: IngredientRepository,
    S: SymptomRepository,
    T: LogSnapshotRepository,
    A: TokenVerifier,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn get_symptoms(&self, _identity: Identity) -> Result<Vec<Symptom>, CoreError> {
        let mut symptoms = self.symptom_repository.list_symptoms().await?;
        symptoms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(symptoms)
    }

    async fn get_ingredients(&self, _identity: Identity) -> Result<Vec<Ingredient>, CoreError> {
        let mut ingredients = self.ingredient_repository.list_ingredients().await?;
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ingredients)
    }
}
