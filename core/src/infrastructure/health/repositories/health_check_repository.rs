use std::{sync::Arc, time::Instant};

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, sea_orm::DbErr> {
        let started = Instant::now();
        self.db
            .execute(Statement::from_string(DbBackend::Postgres, "SELECT 1"))
            .await?;
        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await.map_err(|e| {
            error!("Database health check failed: {}", e);
            CoreError::DatabaseError("database unreachable".to_string())
        })
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let status = match self.ping().await {
            Ok(response_time_ms) => DatabaseHealthStatus {
                status: "healthy".to_string(),
                response_time_ms,
                error: None,
            },
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                DatabaseHealthStatus {
                    status: "unhealthy".to_string(),
                    response_time_ms: 0,
                    error: Some(e.to_string()),
                }
            }
        };

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::*;
    use crate::{
        domain::catalog::ports::SymptomRepository, entity::symptoms,
        infrastructure::catalog::repositories::symptom_repository::PostgresSymptomRepository,
    };

    #[tokio::test]
    async fn repositories_share_one_connection() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .append_query_results([Vec::<symptoms::Model>::new()])
                .into_connection(),
        );

        let health = PostgresHealthCheckRepository::new(db.clone());
        let symptoms = PostgresSymptomRepository::new(db.clone());

        assert!(health.health().await.is_ok());
        assert!(symptoms.list_symptoms().await.unwrap().is_empty());
        assert_eq!(Arc::strong_count(&db), 3);
    }

    #[tokio::test]
    async fn unreachable_database_is_reported_not_raised() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let status = PostgresHealthCheckRepository::new(Arc::new(db))
            .readness()
            .await
            .unwrap();

        assert_eq!(status.status, "unhealthy");
        assert!(status.error.is_some());
    }
}
