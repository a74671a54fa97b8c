use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "weapon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub weapon_type_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::weapon_type::Entity",
        from = "Column::WeaponTypeId",
        to = "super::weapon_type::Column::Id"
    )]
    WeaponType,
    #[sea_orm(has_many = "super::weapon_stats::Entity")]
    WeaponStats,
}

impl Related<super::weapon_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeaponType.def()
    }
}

impl Related<super::weapon_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeaponStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
