use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "log_symptoms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub log_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub symptom_id: Uuid,
    pub severity: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::logs::Entity",
        from = "Column::LogId",
        to = "super::logs::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Logs,
    #[sea_orm(
        belongs_to = "super::symptoms::Entity",
        from = "Column::SymptomId",
        to = "super::symptoms::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Symptoms,
}

impl Related<super::logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logs.def()
    }
}

impl Related<super::symptoms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Symptoms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
