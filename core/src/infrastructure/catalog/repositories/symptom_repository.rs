use std::sync::Arc;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    domain::{
        catalog::{entities::Symptom, ports::SymptomRepository},
        common::entities::app_errors::CoreError,
    },
    entity::symptoms::{Column, Entity},
    infrastructure::db::postgres::database_error,
};

#[derive(Debug, Clone)]
pub struct PostgresSymptomRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresSymptomRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl SymptomRepository for PostgresSymptomRepository {
    async fn list_symptoms(&self) -> Result<Vec<Symptom>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(database_error("list symptoms"))?;

        Ok(models.into_iter().map(Symptom::from).collect())
    }

    async fn get_by_ids(&self, symptom_ids: Vec<Uuid>) -> Result<Vec<Symptom>, CoreError> {
        if symptom_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Entity::find()
            .filter(Column::Id.is_in(symptom_ids))
            .all(self.db.as_ref())
            .await
            .map_err(database_error("load symptoms"))?;

        Ok(models.into_iter().map(Symptom::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::entity::symptoms::Model;

    #[tokio::test]
    async fn symptoms_are_mapped_from_rows() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![Model {
                id,
                name: "Bloating".to_string(),
                description: Some("Abdominal fullness".to_string()),
            }]])
            .into_connection();

        let symptoms = PostgresSymptomRepository::new(Arc::new(db))
            .get_by_ids(vec![id])
            .await
            .unwrap();

        assert_eq!(symptoms.len(), 1);
        assert_eq!(symptoms[0].name, "Bloating");
    }

    #[tokio::test]
    async fn empty_id_list_skips_the_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let symptoms = PostgresSymptomRepository::new(Arc::new(db))
            .get_by_ids(Vec::new())
            .await
            .unwrap();

        assert!(symptoms.is_empty());
    }
}
