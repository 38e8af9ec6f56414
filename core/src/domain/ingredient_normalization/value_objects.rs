use crate::domain::common::entities::app_errors::{CoreError, Violations};

pub const MAX_RAW_TEXT_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeIngredientInput {
    pub raw_text: String,
}

impl NormalizeIngredientInput {
    /// Returns the trimmed text, rejecting empty or overly long input.
    pub fn validate(&self) -> Result<&str, CoreError> {
        let text = self.raw_text.trim();
        let length = text.chars().count();

        if length == 0 || length > MAX_RAW_TEXT_LENGTH {
            return Err(CoreError::invalid_field(
                "raw_text",
                format!("must be between 1 and {MAX_RAW_TEXT_LENGTH} characters"),
            ));
        }

        Ok(text)
    }
}

/// Thresholds for the fuzzy and LLM matching tiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationConfig {
    pub fuzzy_threshold: f64,
    pub llm_fallback_threshold: f64,
    pub max_matches: usize,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.75,
            llm_fallback_threshold: 0.9,
            max_matches: 5,
        }
    }
}

impl NormalizationConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut violations = Violations::new();

        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            violations.push("fuzzy_threshold", "must be in [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.llm_fallback_threshold) {
            violations.push("llm_fallback_threshold", "must be in [0, 1]");
        }
        if self.max_matches < 1 {
            violations.push("max_matches", "must be at least 1");
        }

        violations.into_result()
    }
}
