use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: Date,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::log_ingredients::Entity")]
    LogIngredients,
    #[sea_orm(has_many = "super::log_symptoms::Entity")]
    LogSymptoms,
}

impl Related<super::log_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LogIngredients.def()
    }
}

impl Related<super::log_symptoms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LogSymptoms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
