use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    food_log::{
        entities::{FoodLog, NewFoodLog},
        value_objects::{CreateFoodLogInput, GetFoodLogsFilter, Paginated},
    },
};

/// Repository trait for food logs
#[cfg_attr(test, mockall::automock)]
pub trait FoodLogRepository: Send + Sync {
    /// Persists the log, its ingredient links and symptom rows atomically and returns
    /// the populated log.
    fn create_log(
        &self,
        log: NewFoodLog,
    ) -> impl Future<Output = Result<FoodLog, CoreError>> + Send;

    fn get_by_id(
        &self,
        log_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodLog>, CoreError>> + Send;

    /// Returns one page of the user's logs (newest `log_date` first) and the total count.
    fn list_logs(
        &self,
        user_id: Uuid,
        filter: GetFoodLogsFilter,
    ) -> impl Future<Output = Result<(Vec<FoodLog>, u64), CoreError>> + Send;
}

/// Service trait for food log use cases
pub trait FoodLogService: Send + Sync {
    fn create_log(
        &self,
        identity: Identity,
        input: CreateFoodLogInput,
    ) -> impl Future<Output = Result<FoodLog, CoreError>> + Send;

    fn get_logs(
        &self,
        identity: Identity,
        filter: GetFoodLogsFilter,
    ) -> impl Future<Output = Result<Paginated<FoodLog>, CoreError>> + Send;

    fn get_log(
        &self,
        identity: Identity,
        log_id: Uuid,
    ) -> impl Future<Output = Result<FoodLog, CoreError>> + Send;
}
