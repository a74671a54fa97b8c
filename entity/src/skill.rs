use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skill")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub type_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::skill_type::Entity",
        from = "Column::TypeId",
        to = "super::skill_type::Column::Id"
    )]
    SkillType,
}

impl Related<super::skill_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
