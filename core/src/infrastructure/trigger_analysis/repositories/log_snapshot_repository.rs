use std::sync::Arc;

use sea_orm::{
    AccessMode, DatabaseConnection, DbBackend, FromQueryResult, IsolationLevel, Statement,
    TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        trigger_analysis::{
            entities::{DateRange, LogObservation},
            ports::LogSnapshotRepository,
        },
    },
    infrastructure::{
        db::postgres::database_error,
        trigger_analysis::mappers::{LogIngredientRow, LogSymptomRow, build_observations},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresLogSnapshotRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresLogSnapshotRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl LogSnapshotRepository for PostgresLogSnapshotRepository {
    async fn fetch_observations(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<LogObservation>, CoreError> {
        // Both reads share one snapshot so consumption and baseline agree.
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(database_error("begin snapshot transaction"))?;

        let ingredient_stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
              l.id AS log_id,
              l.log_date,
              li.ingredient_id,
              i.name AS ingredient_name
            FROM logs l
            LEFT JOIN log_ingredients li ON li.log_id = l.id
            LEFT JOIN ingredients i ON i.id = li.ingredient_id
            WHERE l.user_id = $1
              AND l.log_date BETWEEN $2 AND $3
            ORDER BY l.log_date, l.id, li.position
            "#,
            [
                user_id.into(),
                range.start_date.into(),
                range.end_date.into(),
            ],
        );

        let ingredient_rows = LogIngredientRow::find_by_statement(ingredient_stmt)
            .all(&txn)
            .await
            .map_err(database_error("read log ingredients snapshot"))?;

        let symptom_stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT
              ls.log_id,
              ls.symptom_id,
              s.name AS symptom_name,
              ls.severity
            FROM log_symptoms ls
            INNER JOIN logs l ON l.id = ls.log_id
            INNER JOIN symptoms s ON s.id = ls.symptom_id
            WHERE l.user_id = $1
              AND l.log_date BETWEEN $2 AND $3
            "#,
            [
                user_id.into(),
                range.start_date.into(),
                range.end_date.into(),
            ],
        );

        let symptom_rows = LogSymptomRow::find_by_statement(symptom_stmt)
            .all(&txn)
            .await
            .map_err(database_error("read log symptoms snapshot"))?;

        txn.commit()
            .await
            .map_err(database_error("close snapshot transaction"))?;

        debug!(
            ingredient_rows = ingredient_rows.len(),
            symptom_rows = symptom_rows.len(),
            "log snapshot read"
        );

        build_observations(ingredient_rows, symptom_rows)
    }
}
