use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        trigger_analysis::entities::{IngredientRef, LogObservation, SymptomObservation},
    },
    infrastructure::food_log::mappers::map_severity,
};

/// One row per (log, ingredient); logs without ingredients come back with nulls.
#[derive(Debug, Clone, FromQueryResult)]
pub struct LogIngredientRow {
    pub log_id: Uuid,
    pub log_date: NaiveDate,
    pub ingredient_id: Option<Uuid>,
    pub ingredient_name: Option<String>,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct LogSymptomRow {
    pub log_id: Uuid,
    pub symptom_id: Uuid,
    pub symptom_name: String,
    pub severity: i16,
}

/// Groups flat snapshot rows into observations, in the order logs first appear.
pub fn build_observations(
    ingredient_rows: Vec<LogIngredientRow>,
    symptom_rows: Vec<LogSymptomRow>,
) -> Result<Vec<LogObservation>, CoreError> {
    let mut observations: Vec<LogObservation> = Vec::new();
    let mut index_by_log: HashMap<Uuid, usize> = HashMap::new();

    for row in ingredient_rows {
        let index = *index_by_log.entry(row.log_id).or_insert_with(|| {
            observations.push(LogObservation {
                log_id: row.log_id,
                log_date: row.log_date,
                ingredients: Vec::new(),
                symptoms: Vec::new(),
            });
            observations.len() - 1
        });

        if let (Some(ingredient_id), Some(name)) = (row.ingredient_id, row.ingredient_name) {
            observations[index]
                .ingredients
                .push(IngredientRef { ingredient_id, name });
        }
    }

    for row in symptom_rows {
        // Symptom rows of logs outside the snapshot are ignored.
        let Some(&index) = index_by_log.get(&row.log_id) else {
            continue;
        };
        observations[index].symptoms.push(SymptomObservation {
            symptom_id: row.symptom_id,
            name: row.symptom_name,
            severity: map_severity(row.severity)?,
        });
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[test]
    fn rows_are_grouped_per_log() {
        let first = Uuid::new_v4();
        let empty = Uuid::new_v4();
        let garlic = Uuid::new_v4();
        let onion = Uuid::new_v4();

        let observations = build_observations(
            vec![
                LogIngredientRow {
                    log_id: first,
                    log_date: date(2),
                    ingredient_id: Some(garlic),
                    ingredient_name: Some("garlic".to_string()),
                },
                LogIngredientRow {
                    log_id: first,
                    log_date: date(2),
                    ingredient_id: Some(onion),
                    ingredient_name: Some("onion".to_string()),
                },
                LogIngredientRow {
                    log_id: empty,
                    log_date: date(3),
                    ingredient_id: None,
                    ingredient_name: None,
                },
            ],
            vec![LogSymptomRow {
                log_id: empty,
                symptom_id: Uuid::new_v4(),
                symptom_name: "Nausea".to_string(),
                severity: 2,
            }],
        )
        .unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].ingredients.len(), 2);
        assert!(observations[1].ingredients.is_empty());
        assert_eq!(observations[1].severity(), 2.0);
    }
}
