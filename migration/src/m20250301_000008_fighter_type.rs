use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_faction::Faction, m20250301_000002_fighter_category::FighterCategory,
    m20250301_000007_fighter_stats::FighterStats,
};

static IDX_FIGHTER_TYPE_FACTION_ID: &str = "idx-fighter_type-faction_id";
static IDX_FIGHTER_TYPE_FIGHTER_CATEGORY_ID: &str = "idx-fighter_type-fighter_category_id";
static FK_FIGHTER_TYPE_FACTION_ID: &str = "fk-fighter_type-faction_id";
static FK_FIGHTER_TYPE_FIGHTER_CATEGORY_ID: &str = "fk-fighter_type-fighter_category_id";
static FK_FIGHTER_TYPE_FIGHTER_STATS_ID: &str = "fk-fighter_type-fighter_stats_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FighterType::Table)
                    .if_not_exists()
                    .col(string(FighterType::Id).primary_key())
                    .col(string_uniq(FighterType::Name))
                    .col(integer(FighterType::Cost))
                    .col(string(FighterType::FactionId))
                    .col(string(FighterType::FighterCategoryId))
                    .col(string_uniq(FighterType::FighterStatsId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FIGHTER_TYPE_FACTION_ID)
                    .table(FighterType::Table)
                    .col(FighterType::FactionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FIGHTER_TYPE_FIGHTER_CATEGORY_ID)
                    .table(FighterType::Table)
                    .col(FighterType::FighterCategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIGHTER_TYPE_FACTION_ID)
                    .from_tbl(FighterType::Table)
                    .from_col(FighterType::FactionId)
                    .to_tbl(Faction::Table)
                    .to_col(Faction::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIGHTER_TYPE_FIGHTER_CATEGORY_ID)
                    .from_tbl(FighterType::Table)
                    .from_col(FighterType::FighterCategoryId)
                    .to_tbl(FighterCategory::Table)
                    .to_col(FighterCategory::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FIGHTER_TYPE_FIGHTER_STATS_ID)
                    .from_tbl(FighterType::Table)
                    .from_col(FighterType::FighterStatsId)
                    .to_tbl(FighterStats::Table)
                    .to_col(FighterStats::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_FIGHTER_TYPE_FIGHTER_STATS_ID,
            FK_FIGHTER_TYPE_FIGHTER_CATEGORY_ID,
            FK_FIGHTER_TYPE_FACTION_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(FighterType::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [
            IDX_FIGHTER_TYPE_FIGHTER_CATEGORY_ID,
            IDX_FIGHTER_TYPE_FACTION_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(FighterType::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(FighterType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FighterType {
    Table,
    Id,
    Name,
    Cost,
    FactionId,
    FighterCategoryId,
    FighterStatsId,
}
