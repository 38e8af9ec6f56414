use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::{CoreError, Violations},
    trigger_analysis::entities::DateRange,
};

pub const DEFAULT_TRIGGER_LIMIT: u32 = 10;
pub const MAX_TRIGGER_LIMIT: u32 = 50;

/// Statistical validity gates and interval level for trigger scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerAnalysisConfig {
    pub min_consumption_threshold: u32,
    pub min_logs_threshold: u32,
    pub confidence_level: f64,
}

impl Default for TriggerAnalysisConfig {
    fn default() -> Self {
        Self {
            min_consumption_threshold: 3,
            min_logs_threshold: 5,
            confidence_level: 0.95,
        }
    }
}

impl TriggerAnalysisConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Violations::new();

        if self.min_consumption_threshold < 1 {
            violations.push("min_consumption_threshold", "must be at least 1");
        }
        if self.min_logs_threshold < 1 {
            violations.push("min_logs_threshold", "must be at least 1");
        }
        if !(0.5..1.0).contains(&self.confidence_level) {
            violations.push("confidence_level", "must be in [0.5, 1)");
        }

        violations.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTopTriggersInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub limit: u32,
    pub detailed: bool,
}

impl GetTopTriggersInput {
    pub fn validate(&self) -> Result<DateRange, CoreError> {
        let mut violations = Violations::new();

        if self.start_date > self.end_date {
            violations.push("start_date", "must be on or before end_date");
        }
        if !(1..=MAX_TRIGGER_LIMIT).contains(&self.limit) {
            violations.push("limit", format!("must be between 1 and {MAX_TRIGGER_LIMIT}"));
        }

        violations.into_result()?;

        Ok(DateRange {
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(TriggerAnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn certain_confidence_is_rejected() {
        let config = TriggerAnalysisConfig {
            confidence_level: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn single_day_range_is_valid() {
        let input = GetTopTriggersInput {
            start_date: date(3),
            end_date: date(3),
            limit: 1,
            detailed: false,
        };
        assert_eq!(input.validate().unwrap().start_date, date(3));
    }

    #[test]
    fn limit_above_cap_and_inverted_range_are_reported_together() {
        let input = GetTopTriggersInput {
            start_date: date(12),
            end_date: date(1),
            limit: 51,
            detailed: false,
        };

        let Err(CoreError::Validation(fields)) = input.validate() else {
            panic!("expected validation error");
        };
        let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["start_date", "limit"]);
    }
}
