use sea_orm::entity::prelude::*;

/// Characteristic profile owned one-to-one by a fighter type.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fighter_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub movement: i32,
    pub weapon_skill: i32,
    pub ballistic_skill: i32,
    pub strength: i32,
    pub toughness: i32,
    pub wounds: i32,
    pub initiative: i32,
    pub attacks: i32,
    pub leadership: i32,
    pub cool: i32,
    pub will: i32,
    pub intelligence: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::fighter_type::Entity")]
    FighterType,
}

impl Related<super::fighter_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FighterType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
