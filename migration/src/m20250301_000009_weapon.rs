use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000006_weapon_type::WeaponType;

static IDX_WEAPON_WEAPON_TYPE_ID: &str = "idx-weapon-weapon_type_id";
static FK_WEAPON_WEAPON_TYPE_ID: &str = "fk-weapon-weapon_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Weapon::Table)
                    .if_not_exists()
                    .col(string(Weapon::Id).primary_key())
                    .col(string_uniq(Weapon::Name))
                    .col(string(Weapon::WeaponTypeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WEAPON_WEAPON_TYPE_ID)
                    .table(Weapon::Table)
                    .col(Weapon::WeaponTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WEAPON_WEAPON_TYPE_ID)
                    .from_tbl(Weapon::Table)
                    .from_col(Weapon::WeaponTypeId)
                    .to_tbl(WeaponType::Table)
                    .to_col(WeaponType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WEAPON_WEAPON_TYPE_ID)
                    .table(Weapon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEAPON_WEAPON_TYPE_ID)
                    .table(Weapon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Weapon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Weapon {
    Table,
    Id,
    Name,
    WeaponTypeId,
}
