use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000009_weapon::Weapon;

static IDX_WEAPON_STATS_WEAPON_ID: &str = "idx-weapon_stats-weapon_id";
static FK_WEAPON_STATS_WEAPON_ID: &str = "fk-weapon_stats-weapon_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeaponStats::Table)
                    .if_not_exists()
                    .col(string(WeaponStats::Id).primary_key())
                    .col(string(WeaponStats::WeaponId))
                    .col(text(WeaponStats::Description))
                    .col(string(WeaponStats::RangeShort))
                    .col(string(WeaponStats::RangeLong))
                    .col(string(WeaponStats::AccuracyShort))
                    .col(string(WeaponStats::AccuracyLong))
                    .col(string(WeaponStats::Strength))
                    .col(string(WeaponStats::ArmourPenetration))
                    .col(string(WeaponStats::Damage))
                    .col(string(WeaponStats::Ammo))
                    .col(boolean(WeaponStats::IsDefault))
                    .col(boolean(WeaponStats::IsAmmo))
                    .col(string_null(WeaponStats::CombiType))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WEAPON_STATS_WEAPON_ID)
                    .table(WeaponStats::Table)
                    .col(WeaponStats::WeaponId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WEAPON_STATS_WEAPON_ID)
                    .from_tbl(WeaponStats::Table)
                    .from_col(WeaponStats::WeaponId)
                    .to_tbl(Weapon::Table)
                    .to_col(Weapon::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WEAPON_STATS_WEAPON_ID)
                    .table(WeaponStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEAPON_STATS_WEAPON_ID)
                    .table(WeaponStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WeaponStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WeaponStats {
    Table,
    Id,
    WeaponId,
    Description,
    RangeShort,
    RangeLong,
    AccuracyShort,
    AccuracyLong,
    Strength,
    ArmourPenetration,
    Damage,
    Ammo,
    IsDefault,
    IsAmmo,
    CombiType,
}
