use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ingredient_aliases::Entity")]
    IngredientAliases,
    #[sea_orm(has_many = "super::log_ingredients::Entity")]
    LogIngredients,
}

impl Related<super::ingredient_aliases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IngredientAliases.def()
    }
}

impl Related<super::log_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LogIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
