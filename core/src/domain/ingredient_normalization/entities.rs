use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// How a free-text phrase was resolved to a canonical ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Deterministic,
    Fuzzy,
    Llm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedMatch {
    pub ingredient_id: Uuid,
    pub name: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub method: MatchMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizationResult {
    pub raw_text: String,
    pub matches: Vec<NormalizedMatch>,
}
