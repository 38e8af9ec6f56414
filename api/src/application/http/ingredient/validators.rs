use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Length bounds apply to the trimmed text and are checked by the normalizer.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NormalizeIngredientValidator {
    #[validate(length(min = 1, message = "raw_text is required"))]
    #[schema(example = "roma tomatoes")]
    pub raw_text: String,
}
