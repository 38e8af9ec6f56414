use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    catalog::entities::{Ingredient, Symptom},
    common::entities::app_errors::CoreError,
};

/// Repository trait for canonical ingredients
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn list_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;
}

/// Repository trait for the symptom catalog
#[cfg_attr(test, mockall::automock)]
pub trait SymptomRepository: Send + Sync {
    fn list_symptoms(&self) -> impl Future<Output = Result<Vec<Symptom>, CoreError>> + Send;

    fn get_by_ids(
        &self,
        symptom_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Symptom>, CoreError>> + Send;
}

pub trait CatalogService: Send + Sync {
    fn get_symptoms(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Symptom>, CoreError>> + Send;

    fn get_ingredients(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;
}
