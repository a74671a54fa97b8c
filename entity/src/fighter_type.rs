use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fighter_type")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub cost: i32,
    pub faction_id: String,
    pub fighter_category_id: String,
    #[sea_orm(unique)]
    pub fighter_stats_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faction::Entity",
        from = "Column::FactionId",
        to = "super::faction::Column::Id"
    )]
    Faction,
    #[sea_orm(
        belongs_to = "super::fighter_category::Entity",
        from = "Column::FighterCategoryId",
        to = "super::fighter_category::Column::Id"
    )]
    FighterCategory,
    #[sea_orm(
        belongs_to = "super::fighter_stats::Entity",
        from = "Column::FighterStatsId",
        to = "super::fighter_stats::Column::Id"
    )]
    FighterStats,
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faction.def()
    }
}

impl Related<super::fighter_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FighterCategory.def()
    }
}

impl Related<super::fighter_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FighterStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
