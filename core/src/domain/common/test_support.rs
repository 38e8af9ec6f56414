//! Port doubles for service tests.
//!
//! `FakeStore` keeps state across calls for multi-step scenarios; `PortMocks` bundles the
//! generated mockall doubles for tests that pin a single port interaction.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use uuid::Uuid;

use crate::domain::{
    authentication::{ports::MockTokenVerifier, value_objects::Identity},
    catalog::{
        entities::{Ingredient, Symptom},
        ports::{
            IngredientRepository, MockIngredientRepository, MockSymptomRepository,
            SymptomRepository,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    food_log::{
        entities::{FoodLog, LogIngredient, LogSymptom, NewFoodLog},
        ports::{FoodLogRepository, MockFoodLogRepository},
        value_objects::GetFoodLogsFilter,
    },
    health::ports::MockHealthCheckRepository,
    ingredient_normalization::{
        ports::{LLMClient, MockLLMClient},
        value_objects::NormalizationConfig,
    },
    trigger_analysis::{
        entities::{DateRange, IngredientRef, LogObservation, SymptomObservation},
        ports::{LogSnapshotRepository, MockLogSnapshotRepository},
        value_objects::TriggerAnalysisConfig,
    },
};

/// Store-backed service. The verifier and health mocks carry no expectations, so any
/// call into them fails the test.
pub(crate) type TestService = Service<
    FakeStore,
    FakeStore,
    FakeStore,
    FakeStore,
    MockTokenVerifier,
    FakeLlm,
    MockHealthCheckRepository,
>;

pub(crate) type MockedService = Service<
    MockFoodLogRepository,
    MockIngredientRepository,
    MockSymptomRepository,
    MockLogSnapshotRepository,
    MockTokenVerifier,
    MockLLMClient,
    MockHealthCheckRepository,
>;

/// One mock per port. Set expectations on the fields, then build the service.
#[derive(Default)]
pub(crate) struct PortMocks {
    pub food_logs: MockFoodLogRepository,
    pub ingredients: MockIngredientRepository,
    pub symptoms: MockSymptomRepository,
    pub snapshots: MockLogSnapshotRepository,
    pub verifier: MockTokenVerifier,
    pub llm: Option<MockLLMClient>,
    pub health: MockHealthCheckRepository,
}

impl PortMocks {
    pub fn into_service(self) -> MockedService {
        Service::new(
            self.food_logs,
            self.ingredients,
            self.symptoms,
            self.snapshots,
            self.verifier,
            self.llm,
            self.health,
            TriggerAnalysisConfig::default(),
            NormalizationConfig::default(),
        )
    }
}

#[derive(Default)]
struct StoreState {
    symptoms: Vec<Symptom>,
    ingredients: Vec<Ingredient>,
    logs: Vec<FoodLog>,
}

/// Shared in-memory database. Clones see the same state.
#[derive(Clone, Default)]
pub(crate) struct FakeStore {
    state: Arc<Mutex<StoreState>>,
}

impl FakeStore {
    pub fn add_symptom(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().symptoms.push(Symptom {
            id,
            name: name.to_string(),
            description: None,
        });
        id
    }

    pub fn add_ingredient(&self, name: &str, aliases: &[&str]) -> Uuid {
        let mut ingredient = Ingredient::new(name.to_string());
        ingredient.aliases = aliases.iter().map(|a| a.to_string()).collect();
        let id = ingredient.id;
        self.state.lock().unwrap().ingredients.push(ingredient);
        id
    }
}

impl StoreState {
    fn resolve_ingredient(&mut self, name: &str) -> LogIngredient {
        let wanted = name.to_lowercase();
        let existing = self
            .ingredients
            .iter()
            .find(|i| i.names().any(|n| n.to_lowercase() == wanted));

        let ingredient = match existing {
            Some(ingredient) => ingredient.clone(),
            None => {
                let created = Ingredient::new(name.to_string());
                self.ingredients.push(created.clone());
                created
            }
        };

        LogIngredient {
            ingredient_id: ingredient.id,
            name: ingredient.name,
        }
    }
}

impl FoodLogRepository for FakeStore {
    async fn create_log(&self, log: NewFoodLog) -> Result<FoodLog, CoreError> {
        let mut state = self.state.lock().unwrap();

        let ingredients = log
            .ingredient_names
            .iter()
            .map(|name| state.resolve_ingredient(name))
            .collect();

        let symptoms = log
            .symptoms
            .iter()
            .map(|entry| {
                let symptom = state
                    .symptoms
                    .iter()
                    .find(|s| s.id == entry.symptom_id)
                    .ok_or(CoreError::UnknownSymptom(entry.symptom_id))?;
                Ok(LogSymptom {
                    symptom_id: symptom.id,
                    name: symptom.name.clone(),
                    severity: entry.severity,
                })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        let created = FoodLog {
            id: log.id,
            user_id: log.user_id,
            log_date: log.log_date,
            notes: log.notes,
            ingredients,
            symptoms,
            created_at: log.created_at,
        };
        state.logs.push(created.clone());

        Ok(created)
    }

    async fn get_by_id(&self, log_id: Uuid, user_id: Uuid) -> Result<Option<FoodLog>, CoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .logs
            .iter()
            .find(|l| l.id == log_id && l.user_id == user_id)
            .cloned())
    }

    async fn list_logs(
        &self,
        user_id: Uuid,
        filter: GetFoodLogsFilter,
    ) -> Result<(Vec<FoodLog>, u64), CoreError> {
        let state = self.state.lock().unwrap();
        let mut logs: Vec<FoodLog> = state
            .logs
            .iter()
            .filter(|l| l.user_id == user_id)
            .filter(|l| filter.start_date.is_none_or(|start| l.log_date >= start))
            .filter(|l| filter.end_date.is_none_or(|end| l.log_date <= end))
            .cloned()
            .collect();
        logs.sort_by(|a, b| {
            b.log_date
                .cmp(&a.log_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        let total = logs.len() as u64;
        let page = logs
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.per_page as usize)
            .collect();

        Ok((page, total))
    }
}

impl IngredientRepository for FakeStore {
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        Ok(self.state.lock().unwrap().ingredients.clone())
    }
}

impl SymptomRepository for FakeStore {
    async fn list_symptoms(&self) -> Result<Vec<Symptom>, CoreError> {
        Ok(self.state.lock().unwrap().symptoms.clone())
    }

    async fn get_by_ids(&self, symptom_ids: Vec<Uuid>) -> Result<Vec<Symptom>, CoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .symptoms
            .iter()
            .filter(|s| symptom_ids.contains(&s.id))
            .cloned()
            .collect())
    }
}

impl LogSnapshotRepository for FakeStore {
    async fn fetch_observations(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<LogObservation>, CoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .logs
            .iter()
            .filter(|l| l.user_id == user_id && range.contains(l.log_date))
            .map(|l| LogObservation {
                log_id: l.id,
                log_date: l.log_date,
                ingredients: l
                    .ingredients
                    .iter()
                    .map(|i| IngredientRef {
                        ingredient_id: i.ingredient_id,
                        name: i.name.clone(),
                    })
                    .collect(),
                symptoms: l
                    .symptoms
                    .iter()
                    .map(|s| SymptomObservation {
                        symptom_id: s.symptom_id,
                        name: s.name.clone(),
                        severity: s.severity,
                    })
                    .collect(),
            })
            .collect())
    }
}

/// Canned LLM that counts how often it was asked.
#[derive(Clone)]
pub(crate) struct FakeLlm {
    reply: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl FakeLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LLMClient for FakeLlm {
    async fn generate_with_text(
        &self,
        _prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| CoreError::ExternalServiceError("model unavailable".to_string()))
    }
}

fn build(store: FakeStore, llm: Option<FakeLlm>) -> TestService {
    Service::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        MockTokenVerifier::new(),
        llm,
        MockHealthCheckRepository::new(),
        TriggerAnalysisConfig::default(),
        NormalizationConfig::default(),
    )
}

pub(crate) fn service_with_store(store: FakeStore) -> TestService {
    build(store, None)
}

pub(crate) fn service_with_store_and_llm(store: FakeStore, llm: FakeLlm) -> TestService {
    build(store, Some(llm))
}

/// A fresh caller; every call returns a different user.
pub(crate) fn identity() -> Identity {
    Identity {
        user_id: Uuid::new_v4(),
        email: None,
        role: None,
    }
}
