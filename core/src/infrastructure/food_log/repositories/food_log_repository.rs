use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbBackend, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Statement, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_uuid_v7},
        food_log::{
            entities::{FoodLog, LogIngredient, LogSymptom, NewFoodLog},
            ports::FoodLogRepository,
            value_objects::GetFoodLogsFilter,
        },
    },
    entity::{
        ingredients::Entity as IngredientEntity,
        log_ingredients::{
            ActiveModel as LogIngredientActiveModel, Column as LogIngredientColumn,
            Entity as LogIngredientEntity,
        },
        log_symptoms::{
            ActiveModel as LogSymptomActiveModel, Column as LogSymptomColumn,
            Entity as LogSymptomEntity,
        },
        logs::{ActiveModel, Column, Entity, Model},
        symptoms::{Column as SymptomColumn, Entity as SymptomEntity},
    },
    infrastructure::{db::postgres::database_error, food_log::mappers::assemble_logs},
};

#[derive(Debug, FromQueryResult)]
struct ResolvedIngredient {
    id: Uuid,
    name: String,
}

impl From<ResolvedIngredient> for LogIngredient {
    fn from(resolved: ResolvedIngredient) -> Self {
        Self {
            ingredient_id: resolved.id,
            name: resolved.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresFoodLogRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresFoodLogRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_ingredient(
        txn: &DatabaseTransaction,
        name: &str,
    ) -> Result<Option<ResolvedIngredient>, CoreError> {
        let lookup = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT i.id, i.name
            FROM ingredients i
            WHERE lower(i.name) = lower($1)
            UNION ALL
            SELECT i.id, i.name
            FROM ingredient_aliases a
            INNER JOIN ingredients i ON i.id = a.ingredient_id
            WHERE lower(a.alias) = lower($1)
            LIMIT 1
            "#,
            [name.into()],
        );

        ResolvedIngredient::find_by_statement(lookup)
            .one(txn)
            .await
            .map_err(database_error("look up ingredient"))
    }

    /// Finds the canonical ingredient for `name` by case-insensitive name or alias,
    /// creating it when nothing matches.
    async fn resolve_ingredient(
        txn: &DatabaseTransaction,
        name: &str,
    ) -> Result<LogIngredient, CoreError> {
        if let Some(found) = Self::find_ingredient(txn, name).await? {
            return Ok(found.into());
        }

        let insert = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            WITH inserted AS (
                INSERT INTO ingredients (id, name, created_at)
                VALUES ($1, $2, now())
                ON CONFLICT ((lower(name))) DO NOTHING
                RETURNING id, name
            )
            SELECT id, name FROM inserted
            UNION ALL
            SELECT id, name FROM ingredients WHERE lower(name) = lower($2)
            LIMIT 1
            "#,
            [generate_uuid_v7().into(), name.into()],
        );

        let created = ResolvedIngredient::find_by_statement(insert)
            .one(txn)
            .await
            .map_err(database_error("create ingredient"))?;

        if let Some(created) = created {
            info!(ingredient_id = %created.id, "canonical ingredient created");
            return Ok(created.into());
        }

        // Lost the conflict to a concurrent insert; a fresh statement sees its row.
        Self::find_ingredient(txn, name)
            .await?
            .map(LogIngredient::from)
            .ok_or_else(|| CoreError::DatabaseError("create ingredient".to_string()))
    }

    async fn load_children(
        conn: &DatabaseConnection,
        models: Vec<Model>,
    ) -> Result<Vec<FoodLog>, CoreError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }
        let log_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let ingredient_rows = LogIngredientEntity::find()
            .filter(LogIngredientColumn::LogId.is_in(log_ids.clone()))
            .find_also_related(IngredientEntity)
            .order_by_asc(LogIngredientColumn::Position)
            .all(conn)
            .await
            .map_err(database_error("load log ingredients"))?;

        let symptom_rows = LogSymptomEntity::find()
            .filter(LogSymptomColumn::LogId.is_in(log_ids))
            .find_also_related(SymptomEntity)
            .all(conn)
            .await
            .map_err(database_error("load log symptoms"))?;

        assemble_logs(models, ingredient_rows, symptom_rows)
    }
}

impl FoodLogRepository for PostgresFoodLogRepository {
    async fn create_log(&self, log: NewFoodLog) -> Result<FoodLog, CoreError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(database_error("begin log transaction"))?;

        let mut ingredients: Vec<LogIngredient> = Vec::with_capacity(log.ingredient_names.len());
        for name in &log.ingredient_names {
            let resolved = Self::resolve_ingredient(&txn, name).await?;
            // Two spellings may resolve to the same canonical ingredient.
            if !ingredients
                .iter()
                .any(|i| i.ingredient_id == resolved.ingredient_id)
            {
                ingredients.push(resolved);
            }
        }

        let symptom_ids: Vec<Uuid> = log.symptoms.iter().map(|s| s.symptom_id).collect();
        let known_symptoms = if symptom_ids.is_empty() {
            Vec::new()
        } else {
            SymptomEntity::find()
                .filter(SymptomColumn::Id.is_in(symptom_ids))
                .all(&txn)
                .await
                .map_err(database_error("load symptoms"))?
        };

        let mut symptoms = Vec::with_capacity(log.symptoms.len());
        for entry in &log.symptoms {
            let symptom = known_symptoms
                .iter()
                .find(|s| s.id == entry.symptom_id)
                .ok_or(CoreError::UnknownSymptom(entry.symptom_id))?;
            symptoms.push(LogSymptom {
                symptom_id: symptom.id,
                name: symptom.name.clone(),
                severity: entry.severity,
            });
        }

        let created = Entity::insert(ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            log_date: Set(log.log_date),
            notes: Set(log.notes.clone()),
            created_at: Set(log.created_at.fixed_offset()),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(database_error("create log"))?;

        if !ingredients.is_empty() {
            let links = ingredients
                .iter()
                .enumerate()
                .map(|(position, ingredient)| LogIngredientActiveModel {
                    log_id: Set(created.id),
                    ingredient_id: Set(ingredient.ingredient_id),
                    position: Set(position as i32),
                });
            LogIngredientEntity::insert_many(links)
                .exec(&txn)
                .await
                .map_err(database_error("link log ingredients"))?;
        }

        if !symptoms.is_empty() {
            let entries = symptoms.iter().map(|symptom| LogSymptomActiveModel {
                log_id: Set(created.id),
                symptom_id: Set(symptom.symptom_id),
                severity: Set(symptom.severity.get() as i16),
            });
            LogSymptomEntity::insert_many(entries)
                .exec(&txn)
                .await
                .map_err(database_error("record log symptoms"))?;
        }

        txn.commit()
            .await
            .map_err(database_error("commit log transaction"))?;

        let mut result = FoodLog::from(created);
        result.ingredients = ingredients;
        result.symptoms = symptoms;

        Ok(result)
    }

    async fn get_by_id(&self, log_id: Uuid, user_id: Uuid) -> Result<Option<FoodLog>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(log_id))
            .filter(Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(database_error("get log"))?;

        let Some(model) = model else {
            return Ok(None);
        };

        Ok(Self::load_children(&self.db, vec![model]).await?.pop())
    }

    async fn list_logs(
        &self,
        user_id: Uuid,
        filter: GetFoodLogsFilter,
    ) -> Result<(Vec<FoodLog>, u64), CoreError> {
        let mut query = Entity::find().filter(Column::UserId.eq(user_id));
        if let Some(start) = filter.start_date {
            query = query.filter(Column::LogDate.gte(start));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(Column::LogDate.lte(end));
        }

        let total = query
            .clone()
            .count(self.db.as_ref())
            .await
            .map_err(database_error("count logs"))?;

        let models = query
            .order_by_desc(Column::LogDate)
            .order_by_desc(Column::CreatedAt)
            .offset(filter.offset())
            .limit(filter.per_page as u64)
            .all(self.db.as_ref())
            .await
            .map_err(database_error("list logs"))?;

        let logs = Self::load_children(&self.db, models).await?;

        Ok((logs, total))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{NaiveDate, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    use super::*;
    use crate::entity::{log_ingredients, log_symptoms};

    fn stored_log(user_id: Uuid) -> Model {
        Model {
            id: Uuid::new_v4(),
            user_id,
            log_date: NaiveDate::from_ymd_opt(2026, 1, 8).unwrap(),
            notes: Some("dinner".to_string()),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn missing_log_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let found = PostgresFoodLogRepository::new(Arc::new(db))
            .get_by_id(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn stored_log_is_read_with_its_children() {
        let user_id = Uuid::new_v4();
        let model = stored_log(user_id);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model.clone()]])
            .append_query_results([Vec::<log_ingredients::Model>::new()])
            .append_query_results([Vec::<log_symptoms::Model>::new()])
            .into_connection();

        let found = PostgresFoodLogRepository::new(Arc::new(db))
            .get_by_id(model.id, user_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, model.id);
        assert_eq!(found.notes.as_deref(), Some("dinner"));
        assert!(found.ingredients.is_empty());
    }

    #[tokio::test]
    async fn query_failure_maps_to_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = PostgresFoodLogRepository::new(Arc::new(db))
            .get_by_id(Uuid::new_v4(), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(CoreError::DatabaseError(_))));
    }

    fn ingredient_row(id: Uuid, name: &str) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("id", Value::from(id)), ("name", Value::from(name))])
    }

    fn no_rows() -> Vec<BTreeMap<&'static str, Value>> {
        Vec::new()
    }

    #[tokio::test]
    async fn existing_alias_resolves_without_insert() {
        let wheat = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ingredient_row(wheat, "wheat")]])
            .into_connection();
        let txn = db.begin().await.unwrap();

        let resolved = PostgresFoodLogRepository::resolve_ingredient(&txn, "Flour")
            .await
            .unwrap();

        assert_eq!(resolved.ingredient_id, wheat);
        assert_eq!(resolved.name, "wheat");
    }

    #[tokio::test]
    async fn lost_insert_race_rereads_the_winner() {
        let kohlrabi = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([no_rows()])
            .append_query_results([no_rows()])
            .append_query_results([vec![ingredient_row(kohlrabi, "kohlrabi")]])
            .into_connection();
        let txn = db.begin().await.unwrap();

        let resolved = PostgresFoodLogRepository::resolve_ingredient(&txn, "kohlrabi")
            .await
            .unwrap();

        assert_eq!(resolved.ingredient_id, kohlrabi);
    }

    #[tokio::test]
    async fn missing_row_after_reread_is_a_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([no_rows()])
            .append_query_results([no_rows()])
            .append_query_results([no_rows()])
            .into_connection();
        let txn = db.begin().await.unwrap();

        let result = PostgresFoodLogRepository::resolve_ingredient(&txn, "kohlrabi").await;

        assert!(matches!(result, Err(CoreError::DatabaseError(_))));
    }
}
