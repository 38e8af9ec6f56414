use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    ingredient_normalization::{
        entities::NormalizationResult, value_objects::NormalizeIngredientInput,
    },
};

/// Text completion with a constrained JSON response.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait IngredientNormalizationService: Send + Sync {
    fn normalize_ingredient(
        &self,
        identity: Identity,
        input: NormalizeIngredientInput,
    ) -> impl Future<Output = Result<NormalizationResult, CoreError>> + Send;
}
