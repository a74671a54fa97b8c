//! Weapon trait (`trait` table). The module name avoids the Rust keyword.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trait")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trait_on_weapon_stats::Entity")]
    TraitOnWeaponStats,
}

impl Related<super::trait_on_weapon_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraitOnWeaponStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
