use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "symptoms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::log_symptoms::Entity")]
    LogSymptoms,
}

impl Related<super::log_symptoms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LogSymptoms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
