use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    trigger_analysis::{
        entities::{DateRange, LogObservation, TriggerAnalysis},
        value_objects::GetTopTriggersInput,
    },
};

/// Read side used by trigger analysis.
#[cfg_attr(test, mockall::automock)]
pub trait LogSnapshotRepository: Send + Sync {
    /// Returns every log of the user inside `range` with its canonical ingredients and
    /// symptom severities. All rows come from one consistent snapshot.
    fn fetch_observations(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<LogObservation>, CoreError>> + Send;
}

pub trait TriggerAnalysisService: Send + Sync {
    fn get_top_triggers(
        &self,
        identity: Identity,
        input: GetTopTriggersInput,
    ) -> impl Future<Output = Result<TriggerAnalysis, CoreError>> + Send;
}
