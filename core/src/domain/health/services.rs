use crate::domain::{
    authentication::ports::TokenVerifier,
    catalog::ports::{IngredientRepository, SymptomRepository},
    common::{entities::app_errors::CoreError, services::Service},
    food_log::ports::FoodLogRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient_normalization::ports::LLMClient,
    trigger_analysis::ports::LogSnapshotRepository,
};

impl<L, I, S, T, A, LLM, HC> HealthCheckService for Service<L, I, S, T, A, LLM, HC>
where
    L: FoodLogRepository,
    I: IngredientRepository,
    S: SymptomRepository,
    T: LogSnapshotRepository,
    A: TokenVerifier,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::PortMocks;

    #[tokio::test]
    async fn readiness_reports_repository_status() {
        let mut mocks = PortMocks::default();
        mocks.health.expect_readness().times(1).returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    status: "healthy".to_string(),
                    response_time_ms: 3,
                    error: None,
                })
            })
        });
        let service = mocks.into_service();

        let status = service.readness().await.unwrap();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.response_time_ms, 3);
        assert_eq!(status.error, None);
    }

    #[tokio::test]
    async fn liveness_failure_propagates() {
        let mut mocks = PortMocks::default();
        mocks.health.expect_health().times(1).returning(|| {
            Box::pin(async { Err(CoreError::DatabaseError("connection reset".to_string())) })
        });
        let service = mocks.into_service();

        let result = service.health().await;
        assert!(matches!(result, Err(CoreError::DatabaseError(_))));
    }
}
