use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "faction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fighter_type::Entity")]
    FighterType,
}

impl Related<super::fighter_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FighterType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
