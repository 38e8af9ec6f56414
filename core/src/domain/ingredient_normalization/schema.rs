use serde::Deserialize;
use serde_json::json;

use crate::domain::catalog::entities::Ingredient;

/// JSON schema the LLM must follow when picking canonical ingredients.
pub fn get_ingredient_match_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "matches": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "confidence": { "type": "number" }
                    },
                    "required": ["name", "confidence"]
                }
            }
        },
        "required": ["matches"]
    })
}

#[derive(Debug, Deserialize)]
pub struct LlmMatchResponse {
    pub matches: Vec<LlmMatch>,
}

#[derive(Debug, Deserialize)]
pub struct LlmMatch {
    pub name: String,
    pub confidence: f64,
}

pub fn build_ingredient_match_prompt(raw_text: &str, catalog: &[Ingredient]) -> String {
    let names = catalog
        .iter()
        .map(|ingredient| format!("- {}", ingredient.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You map food descriptions to canonical ingredients.\n\
         Pick the canonical ingredients from the list below that the text refers to.\n\
         Only use names exactly as written in the list. Return an empty list when nothing fits.\n\
         Give each match a confidence between 0 and 1.\n\n\
         Canonical ingredients:\n{names}\n\n\
         Text: \"{raw_text}\""
    )
}
