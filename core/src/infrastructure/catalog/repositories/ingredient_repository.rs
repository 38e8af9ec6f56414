use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    domain::{
        catalog::{entities::Ingredient, ports::IngredientRepository},
        common::entities::app_errors::CoreError,
    },
    entity::{
        ingredient_aliases::Entity as AliasEntity,
        ingredients::{Column, Entity},
    },
    infrastructure::{catalog::mappers::map_ingredient, db::postgres::database_error},
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresIngredientRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn list_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        let rows = Entity::find()
            .find_with_related(AliasEntity)
            .order_by_asc(Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(database_error("list ingredients"))?;

        Ok(rows
            .into_iter()
            .map(|(model, aliases)| map_ingredient(model, aliases))
            .collect())
    }
}
