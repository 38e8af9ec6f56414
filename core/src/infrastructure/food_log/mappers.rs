use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_log::{
            entities::{FoodLog, LogIngredient, LogSymptom},
            value_objects::Severity,
        },
    },
    entity::{ingredients, log_ingredients, log_symptoms, logs, symptoms},
};

impl From<&logs::Model> for FoodLog {
    fn from(model: &logs::Model) -> Self {
        // Ingredients and symptoms are attached by `assemble_logs`.
        Self {
            id: model.id,
            user_id: model.user_id,
            log_date: model.log_date,
            notes: model.notes.clone(),
            ingredients: Vec::new(),
            symptoms: Vec::new(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<logs::Model> for FoodLog {
    fn from(model: logs::Model) -> Self {
        Self::from(&model)
    }
}

pub fn map_severity(value: i16) -> Result<Severity, CoreError> {
    Severity::new(value as i64)
        .map_err(|_| CoreError::DatabaseError(format!("stored severity out of range: {value}")))
}

/// Attaches ingredient and symptom rows to their logs, keeping the order of `logs`.
/// Ingredient rows are expected in entry order.
pub fn assemble_logs(
    logs: Vec<logs::Model>,
    ingredient_rows: Vec<(log_ingredients::Model, Option<ingredients::Model>)>,
    symptom_rows: Vec<(log_symptoms::Model, Option<symptoms::Model>)>,
) -> Result<Vec<FoodLog>, CoreError> {
    let mut ingredients_by_log: HashMap<Uuid, Vec<(i32, LogIngredient)>> = HashMap::new();
    for (link, ingredient) in ingredient_rows {
        let ingredient = ingredient.ok_or_else(|| {
            CoreError::DatabaseError(format!("dangling ingredient link on log {}", link.log_id))
        })?;
        ingredients_by_log.entry(link.log_id).or_default().push((
            link.position,
            LogIngredient {
                ingredient_id: ingredient.id,
                name: ingredient.name,
            },
        ));
    }

    let mut symptoms_by_log: HashMap<Uuid, Vec<LogSymptom>> = HashMap::new();
    for (entry, symptom) in symptom_rows {
        let symptom = symptom.ok_or_else(|| {
            CoreError::DatabaseError(format!("dangling symptom entry on log {}", entry.log_id))
        })?;
        symptoms_by_log
            .entry(entry.log_id)
            .or_default()
            .push(LogSymptom {
                symptom_id: symptom.id,
                name: symptom.name,
                severity: map_severity(entry.severity)?,
            });
    }

    Ok(logs
        .into_iter()
        .map(|model| {
            let mut log = FoodLog::from(&model);
            if let Some(mut entries) = ingredients_by_log.remove(&model.id) {
                entries.sort_by_key(|(position, _)| *position);
                log.ingredients = entries.into_iter().map(|(_, i)| i).collect();
            }
            if let Some(mut symptoms) = symptoms_by_log.remove(&model.id) {
                symptoms.sort_by(|a, b| a.name.cmp(&b.name));
                log.symptoms = symptoms;
            }
            log
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn log_model(id: Uuid) -> logs::Model {
        logs::Model {
            id,
            user_id: Uuid::new_v4(),
            log_date: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
            notes: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn ingredient(name: &str) -> ingredients::Model {
        ingredients::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn children_are_attached_in_entry_order() {
        let log_id = Uuid::new_v4();
        let rice = ingredient("rice");
        let beans = ingredient("beans");
        let gas = symptoms::Model {
            id: Uuid::new_v4(),
            name: "Gas".to_string(),
            description: None,
        };

        let logs = assemble_logs(
            vec![log_model(log_id), log_model(Uuid::new_v4())],
            vec![
                (
                    log_ingredients::Model {
                        log_id,
                        ingredient_id: beans.id,
                        position: 1,
                    },
                    Some(beans),
                ),
                (
                    log_ingredients::Model {
                        log_id,
                        ingredient_id: rice.id,
                        position: 0,
                    },
                    Some(rice),
                ),
            ],
            vec![(
                log_symptoms::Model {
                    log_id,
                    symptom_id: gas.id,
                    severity: 3,
                },
                Some(gas),
            )],
        )
        .unwrap();

        let names: Vec<&str> = logs[0].ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["rice", "beans"]);
        assert_eq!(logs[0].symptoms[0].severity.get(), 3);
        assert!(logs[1].ingredients.is_empty());
    }

    #[test]
    fn corrupt_severity_is_a_database_error() {
        assert!(matches!(map_severity(9), Err(CoreError::DatabaseError(_))));
    }
}
