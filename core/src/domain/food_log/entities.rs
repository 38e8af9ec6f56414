use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food_log::value_objects::Severity};

/// A meal log with its ingredients and the symptoms recorded against it.
/// Logs are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub notes: Option<String>,
    pub ingredients: Vec<LogIngredient>,
    pub symptoms: Vec<LogSymptom>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogIngredient {
    pub ingredient_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogSymptom {
    pub symptom_id: Uuid,
    pub name: String,
    #[schema(value_type = u8, minimum = 1, maximum = 5)]
    pub severity: Severity,
}

/// Log about to be persisted. Ingredient names are still free text here; the repository
/// resolves them to canonical ingredients in the same transaction as the insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub notes: Option<String>,
    pub ingredient_names: Vec<String>,
    pub symptoms: Vec<NewLogSymptom>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogSymptom {
    pub symptom_id: Uuid,
    pub severity: Severity,
}

#[derive(Debug, Clone)]
pub struct NewFoodLogConfig {
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub notes: Option<String>,
    pub ingredient_names: Vec<String>,
    pub symptoms: Vec<NewLogSymptom>,
}

impl NewFoodLog {
    pub fn new(config: NewFoodLogConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            log_date: config.log_date,
            notes: config.notes,
            ingredient_names: config.ingredient_names,
            symptoms: config.symptoms,
            created_at: now,
        }
    }
}
