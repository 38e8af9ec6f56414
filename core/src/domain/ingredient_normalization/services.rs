use tracing::{debug, instrument, warn};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    catalog::{
        entities::Ingredient,
        ports::{IngredientRepository, SymptomRepository},
    },
    common::{entities::app_errors::CoreError, services::Service},
    food_log::ports::FoodLogRepository,
    health::ports::HealthCheckRepository,
    ingredient_normalization::{
        entities::{MatchMethod, NormalizationResult, NormalizedMatch},
        matching::{deterministic_match, fuzzy_matches, normalize_text, sort_matches},
        ports::{IngredientNormalizationService, LLMClient},
        schema::{LlmMatchResponse, build_ingredient_match_prompt, get_ingredient_match_schema},
        value_objects::NormalizeIngredientInput,
    },
    trigger_analysis::ports::LogSnapshotRepository,
};

/// Upper bound on the confidence attributed to an LLM pick.
pub const MAX_LLM_CONFIDENCE: f64 = 0.9;

impl<L, I, S, T, A, LLM, HC> Service<L, I, S, T, A, LLM, HC>
where
    LLM: LLMClient,
{
    async fn llm_matches(
        &self,
        llm: &LLM,
        raw_text: &str,
        catalog: &[Ingredient],
    ) -> Result<Vec<NormalizedMatch>, CoreError> {
        let prompt = build_ingredient_match_prompt(raw_text, catalog);
        let raw_response = llm
            .generate_with_text(prompt, get_ingredient_match_schema())
            .await?;

        let parsed: LlmMatchResponse = serde_json::from_str(&raw_response).map_err(|e| {
            CoreError::ExternalServiceError(format!("unreadable LLM response: {e}"))
        })?;

        let mut matches: Vec<NormalizedMatch> = Vec::new();
        for pick in parsed.matches {
            let wanted = normalize_text(&pick.name);
            let Some(ingredient) = catalog.iter().find(|i| normalize_text(&i.name) == wanted)
            else {
                debug!("LLM suggested an unknown ingredient: {}", pick.name);
                continue;
            };
            if matches.iter().any(|m| m.ingredient_id == ingredient.id) {
                continue;
            }
            matches.push(NormalizedMatch {
                ingredient_id: ingredient.id,
                name: ingredient.name.clone(),
                confidence: pick.confidence.clamp(0.0, MAX_LLM_CONFIDENCE),
                method: MatchMethod::Llm,
            });
        }

        Ok(matches)
    }
}

/// Keeps the better of two matches for the same ingredient.
fn merge_matches(
    mut matches: Vec<NormalizedMatch>,
    extra: Vec<NormalizedMatch>,
    max_matches: usize,
) -> Vec<NormalizedMatch> {
    for candidate in extra {
        match matches
            .iter_mut()
            .find(|m| m.ingredient_id == candidate.ingredient_id)
        {
            Some(existing) if candidate.confidence > existing.confidence => *existing = candidate,
            Some(_) => {}
            None => matches.push(candidate),
        }
    }
    sort_matches(&mut matches);
    matches.truncate(max_matches);
    matches
}

impl<L, I, S, T, A, LLM, HC> IngredientNormalizationService for Service<L, I, S, T, A, LLM, HC>
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
    async fn normalize_ingredient(
        &self,
        identity: Identity,
        input: NormalizeIngredientInput,
    ) -> Result<NormalizationResult, CoreError> {
        let raw_text = input.validate()?.to_string();
        let normalized = normalize_text(&raw_text);
        let config = self.normalization_config;

        if normalized.is_empty() {
            return Err(CoreError::NoIngredientMatch(raw_text));
        }

        let catalog = self.ingredient_repository.list_ingredients().await?;

        if let Some(hit) = deterministic_match(&normalized, &catalog) {
            return Ok(NormalizationResult {
                raw_text,
                matches: vec![hit],
            });
        }

        let mut matches = fuzzy_matches(
            &normalized,
            &catalog,
            config.fuzzy_threshold,
            config.max_matches,
        );

        let best = matches.first().map(|m| m.confidence).unwrap_or(0.0);
        if let Some(llm) = &self.llm_client
            && best < config.llm_fallback_threshold
            && !catalog.is_empty()
        {
            match self.llm_matches(llm, &raw_text, &catalog).await {
                Ok(picks) => matches = merge_matches(matches, picks, config.max_matches),
                Err(e) => warn!("LLM ingredient matching unavailable, using fuzzy result: {}", e),
            }
        }

        if matches.is_empty() {
            return Err(CoreError::NoIngredientMatch(raw_text));
        }

        Ok(NormalizationResult { raw_text, matches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{
            FakeLlm, FakeStore, PortMocks, identity, service_with_store,
            service_with_store_and_llm,
        },
        ingredient_normalization::ports::MockLLMClient,
    };

    fn input(raw_text: &str) -> NormalizeIngredientInput {
        NormalizeIngredientInput {
            raw_text: raw_text.to_string(),
        }
    }

    fn seeded_store() -> FakeStore {
        let store = FakeStore::default();
        store.add_ingredient("tomato", &["roma tomato"]);
        store.add_ingredient("garlic", &[]);
        store.add_ingredient("lactose-free milk", &[]);
        store
    }

    #[tokio::test]
    async fn alias_is_resolved_deterministically() {
        let service = service_with_store(seeded_store());

        let result = service
            .normalize_ingredient(identity(), input("  Roma Tomato "))
            .await
            .unwrap();

        assert_eq!(result.raw_text, "Roma Tomato");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].name, "tomato");
        assert_eq!(result.matches[0].method, MatchMethod::Deterministic);
    }

    #[tokio::test]
    async fn no_match_without_llm_is_unprocessable() {
        let service = service_with_store(seeded_store());

        let result = service
            .normalize_ingredient(identity(), input("chocolate cake"))
            .await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::NoIngredientMatch("chocolate cake".to_string())
        );
    }

    #[tokio::test]
    async fn empty_text_is_a_validation_error() {
        let service = service_with_store(seeded_store());

        let result = service.normalize_ingredient(identity(), input("   ")).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn llm_picks_are_limited_to_catalog_names() {
        let llm = FakeLlm::replying(
            r#"{"matches":[{"name":"Lactose-free milk","confidence":0.97},{"name":"oat milk","confidence":0.8}]}"#,
        );
        let service = service_with_store_and_llm(seeded_store(), llm.clone());

        let result = service
            .normalize_ingredient(identity(), input("milk without lactose"))
            .await
            .unwrap();

        assert_eq!(llm.calls(), 1);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].name, "lactose-free milk");
        assert_eq!(result.matches[0].method, MatchMethod::Llm);
        assert_eq!(result.matches[0].confidence, MAX_LLM_CONFIDENCE);
    }

    #[tokio::test]
    async fn llm_failure_falls_back_to_fuzzy_matches() {
        let llm = FakeLlm::failing();
        let service = service_with_store_and_llm(seeded_store(), llm.clone());

        let result = service
            .normalize_ingredient(identity(), input("garlik"))
            .await
            .unwrap();

        assert_eq!(llm.calls(), 1);
        assert_eq!(result.matches[0].name, "garlic");
        assert_eq!(result.matches[0].method, MatchMethod::Fuzzy);
    }

    #[tokio::test]
    async fn deterministic_hit_skips_the_llm() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        let mut mocks = PortMocks {
            llm: Some(llm),
            ..PortMocks::default()
        };
        mocks
            .ingredients
            .expect_list_ingredients()
            .times(1)
            .returning(|| Box::pin(async { Ok(vec![Ingredient::new("garlic".to_string())]) }));
        let service = mocks.into_service();

        let result = service
            .normalize_ingredient(identity(), input("Garlic"))
            .await
            .unwrap();

        assert_eq!(result.matches[0].method, MatchMethod::Deterministic);
    }
}
