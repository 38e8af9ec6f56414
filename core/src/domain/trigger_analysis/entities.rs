use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::food_log::value_objects::Severity;

/// Closed calendar date range `[start_date, end_date]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// One log as seen by the scorer: which canonical ingredients were eaten and which
/// symptoms were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogObservation {
    pub log_id: Uuid,
    pub log_date: NaiveDate,
    pub ingredients: Vec<IngredientRef>,
    pub symptoms: Vec<SymptomObservation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRef {
    pub ingredient_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomObservation {
    pub symptom_id: Uuid,
    pub name: String,
    pub severity: Severity,
}

impl LogObservation {
    /// Mean of the severities recorded on the log; a symptom-free log counts as 0.
    pub fn severity(&self) -> f64 {
        if self.symptoms.is_empty() {
            return 0.0;
        }
        let total: u32 = self.symptoms.iter().map(|s| s.severity.get() as u32).sum();
        total as f64 / self.symptoms.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub width: f64,
}

impl ConfidenceInterval {
    pub fn around(estimate: f64, margin: f64) -> Self {
        let lower = estimate - margin;
        let upper = estimate + margin;

        Self {
            lower,
            upper,
            width: upper - lower,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriggerResult {
    pub ingredient_id: Uuid,
    pub name: String,
    pub consumption_count: u32,
    pub avg_severity_when_present: f64,
    pub baseline_avg_severity: f64,
    pub trigger_score: f64,
    /// Interval around `avg_severity_when_present - baseline_avg_severity`.
    pub confidence_interval: ConfidenceInterval,
}

/// Unaggregated ingredient × symptom occurrence, returned for detailed analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CorrelationRow {
    pub log_id: Uuid,
    pub log_date: NaiveDate,
    pub ingredient_id: Uuid,
    pub ingredient_name: String,
    pub symptom_id: Uuid,
    pub symptom_name: String,
    #[schema(value_type = u8, minimum = 1, maximum = 5)]
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriggerAnalysisMeta {
    pub date_range: DateRange,
    pub total_logs: u32,
    pub min_consumption_threshold: u32,
    pub min_logs_threshold: u32,
    pub confidence_level: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TriggerAnalysis {
    pub triggers: Vec<TriggerResult>,
    pub correlations: Option<Vec<CorrelationRow>>,
    pub meta: TriggerAnalysisMeta,
}
