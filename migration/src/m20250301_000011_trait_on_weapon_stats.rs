use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250301_000005_trait::Trait, m20250301_000010_weapon_stats::WeaponStats};

static IDX_TRAIT_ON_WEAPON_STATS_TRAIT_ID: &str = "idx-trait_on_weapon_stats-trait_id";
static FK_TRAIT_ON_WEAPON_STATS_WEAPON_STATS_ID: &str = "fk-trait_on_weapon_stats-weapon_stats_id";
static FK_TRAIT_ON_WEAPON_STATS_TRAIT_ID: &str = "fk-trait_on_weapon_stats-trait_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TraitOnWeaponStats::Table)
                    .if_not_exists()
                    .col(string(TraitOnWeaponStats::WeaponStatsId))
                    .col(string(TraitOnWeaponStats::TraitId))
                    .col(integer(TraitOnWeaponStats::Modifier))
                    .primary_key(
                        Index::create()
                            .col(TraitOnWeaponStats::WeaponStatsId)
                            .col(TraitOnWeaponStats::TraitId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAIT_ON_WEAPON_STATS_TRAIT_ID)
                    .table(TraitOnWeaponStats::Table)
                    .col(TraitOnWeaponStats::TraitId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRAIT_ON_WEAPON_STATS_WEAPON_STATS_ID)
                    .from_tbl(TraitOnWeaponStats::Table)
                    .from_col(TraitOnWeaponStats::WeaponStatsId)
                    .to_tbl(WeaponStats::Table)
                    .to_col(WeaponStats::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRAIT_ON_WEAPON_STATS_TRAIT_ID)
                    .from_tbl(TraitOnWeaponStats::Table)
                    .from_col(TraitOnWeaponStats::TraitId)
                    .to_tbl(Trait::Table)
                    .to_col(Trait::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_TRAIT_ON_WEAPON_STATS_TRAIT_ID,
            FK_TRAIT_ON_WEAPON_STATS_WEAPON_STATS_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TraitOnWeaponStats::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRAIT_ON_WEAPON_STATS_TRAIT_ID)
                    .table(TraitOnWeaponStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TraitOnWeaponStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TraitOnWeaponStats {
    Table,
    WeaponStatsId,
    TraitId,
    Modifier,
}
