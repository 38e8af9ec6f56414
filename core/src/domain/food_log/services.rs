use std::collections::HashSet;

use chrono::{Days, NaiveDate, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    catalog::ports::{IngredientRepository, SymptomRepository},
    common::{
        entities::app_errors::{CoreError, Violations},
        services::Service,
    },
    food_log::{
        entities::{FoodLog, NewFoodLog, NewFoodLogConfig, NewLogSymptom},
        ports::{FoodLogRepository, FoodLogService},
        value_objects::{
            CreateFoodLogInput, GetFoodLogsFilter, MAX_INGREDIENT_LENGTH,
            MAX_INGREDIENTS_PER_LOG, MAX_NOTES_LENGTH, MAX_PER_PAGE, MAX_SYMPTOMS_PER_LOG,
            Paginated, Pagination, Severity,
        },
    },
    health::ports::HealthCheckRepository,
    ingredient_normalization::ports::LLMClient,
    trigger_analysis::ports::LogSnapshotRepository,
};

/// Shape-checked create input: trimmed, deduplicated ingredients and typed severities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidatedFoodLog {
    pub log_date: NaiveDate,
    pub notes: Option<String>,
    pub ingredient_names: Vec<String>,
    pub symptoms: Vec<NewLogSymptom>,
}

pub(crate) fn validate_create_input(
    input: CreateFoodLogInput,
    today: NaiveDate,
) -> Result<ValidatedFoodLog, CoreError> {
    let mut violations = Violations::new();

    let latest_allowed = today.checked_add_days(Days::new(1)).unwrap_or(today);
    if input.log_date > latest_allowed {
        violations.push("log_date", "cannot be in the future");
    }

    let notes = input
        .notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());
    if let Some(ref n) = notes
        && n.chars().count() > MAX_NOTES_LENGTH
    {
        violations.push(
            "notes",
            format!("must be at most {MAX_NOTES_LENGTH} characters"),
        );
    }

    if input.ingredients.len() > MAX_INGREDIENTS_PER_LOG {
        violations.push(
            "ingredients",
            format!("must contain at most {MAX_INGREDIENTS_PER_LOG} entries"),
        );
    }

    let mut seen = HashSet::new();
    let mut ingredient_names = Vec::new();
    for (index, raw) in input.ingredients.iter().enumerate() {
        let name = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let length = name.chars().count();
        if length == 0 || length > MAX_INGREDIENT_LENGTH {
            violations.push(
                format!("ingredients[{index}]"),
                format!("must be between 1 and {MAX_INGREDIENT_LENGTH} characters"),
            );
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            ingredient_names.push(name);
        }
    }

    if input.symptoms.len() > MAX_SYMPTOMS_PER_LOG {
        violations.push(
            "symptoms",
            format!("must contain at most {MAX_SYMPTOMS_PER_LOG} entries"),
        );
    }

    let mut symptoms = Vec::with_capacity(input.symptoms.len());
    for (index, entry) in input.symptoms.iter().enumerate() {
        match Severity::new(entry.severity) {
            Ok(severity) => symptoms.push(NewLogSymptom {
                symptom_id: entry.symptom_id,
                severity,
            }),
            Err(_) => violations.push(
                format!("symptoms[{index}].severity"),
                format!("must be between {} and {}", Severity::MIN, Severity::MAX),
            ),
        }
    }

    if input.ingredients.is_empty() && input.symptoms.is_empty() {
        violations.push(
            "ingredients",
            "a log needs at least one ingredient or symptom",
        );
    }

    violations.into_result()?;

    let mut symptom_ids = HashSet::new();
    for symptom in &symptoms {
        if !symptom_ids.insert(symptom.symptom_id) {
            return Err(CoreError::DuplicateSymptom(symptom.symptom_id));
        }
    }

    Ok(ValidatedFoodLog {
        log_date: input.log_date,
        notes,
        ingredient_names,
        symptoms,
    })
}

pub(crate) fn validate_logs_filter(filter: &GetFoodLogsFilter) -> Result<(), CoreError> {
    let mut violations = Violations::new();

    if filter.page < 1 {
        violations.push("page", "must be at least 1");
    }
    if filter.per_page < 1 || filter.per_page > MAX_PER_PAGE {
        violations.push(
            "per_page",
            format!("must be between 1 and {MAX_PER_PAGE}"),
        );
    }
    if let (Some(start), Some(end)) = (filter.start_date, filter.end_date)
        && start > end
    {
        violations.push("start_date", "must be on or before end_date");
    }

    violations.into_result()
}

impl<L, I, S, T, A, LLM, HC> FoodLogService for Service<L, I, S, T, A, LLM, HC>
where
    L: FoodLogRepository,
    I: IngredientRepository,
    S: SymptomRepository,
    T: LogSnapshotRepository,
    A: TokenVerifier,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, identity, input), fields(user_id = %identity.user_id))]
    async fn create_log(
        &self,
        identity: Identity,
        input: CreateFoodLogInput,
    ) -> Result<FoodLog, CoreError> {
        let validated = validate_create_input(input, Utc::now().date_naive())?;

        if !validated.symptoms.is_empty() {
            let requested: Vec<Uuid> = validated.symptoms.iter().map(|s| s.symptom_id).collect();
            let known: HashSet<Uuid> = self
                .symptom_repository
                .get_by_ids(requested.clone())
                .await?
                .into_iter()
                .map(|s| s.id)
                .collect();

            if let Some(missing) = requested.into_iter().find(|id| !known.contains(id)) {
                return Err(CoreError::UnknownSymptom(missing));
            }
        }

        let log = NewFoodLog::new(NewFoodLogConfig {
            user_id: identity.id(),
            log_date: validated.log_date,
            notes: validated.notes,
            ingredient_names: validated.ingredient_names,
            symptoms: validated.symptoms,
        });

        let created = self.food_log_repository.create_log(log).await?;
        info!(
            log_id = %created.id,
            ingredients = created.ingredients.len(),
            symptoms = created.symptoms.len(),
            "food log created"
        );

        Ok(created)
    }

    #[instrument(skip(self, identity), fields(user_id = %identity.user_id))]
    async fn get_logs(
        &self,
        identity: Identity,
        filter: GetFoodLogsFilter,
    ) -> Result<Paginated<FoodLog>, CoreError> {
        validate_logs_filter(&filter)?;

        let (page, per_page) = (filter.page, filter.per_page);
        let (logs, total) = self
            .food_log_repository
            .list_logs(identity.id(), filter)
            .await?;

        Ok(Paginated {
            data: logs,
            pagination: Pagination::new(page, per_page, total),
        })
    }

    async fn get_log(&self, identity: Identity, log_id: Uuid) -> Result<FoodLog, CoreError> {
        self.food_log_repository
            .get_by_id(log_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }
}
