use sea_orm::entity::prelude::*;

/// Join row linking a weapon profile to a trait, identified by both ids.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trait_on_weapon_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub weapon_stats_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub trait_id: String,
    pub modifier: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::weapon_stats::Entity",
        from = "Column::WeaponStatsId",
        to = "super::weapon_stats::Column::Id"
    )]
    WeaponStats,
    #[sea_orm(
        belongs_to = "super::game_trait::Entity",
        from = "Column::TraitId",
        to = "super::game_trait::Column::Id"
    )]
    Trait,
}

impl Related<super::weapon_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeaponStats.def()
    }
}

impl Related<super::game_trait::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trait.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
