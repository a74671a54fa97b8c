use sea_orm::entity::prelude::*;

/// One firing profile of a weapon. Profile values are stored as printed on the
/// weapon card (`8"`, `S+1`, `-`, `4+`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "weapon_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub weapon_id: String,
    pub description: String,
    pub range_short: String,
    pub range_long: String,
    pub accuracy_short: String,
    pub accuracy_long: String,
    pub strength: String,
    pub armour_penetration: String,
    pub damage: String,
    pub ammo: String,
    pub is_default: bool,
    pub is_ammo: bool,
    pub combi_type: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::weapon::Entity",
        from = "Column::WeaponId",
        to = "super::weapon::Column::Id"
    )]
    Weapon,
    #[sea_orm(has_many = "super::trait_on_weapon_stats::Entity")]
    TraitOnWeaponStats,
}

impl Related<super::weapon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Weapon.def()
    }
}

impl Related<super::trait_on_weapon_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraitOnWeaponStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
