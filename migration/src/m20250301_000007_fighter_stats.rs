use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FighterStats::Table)
                    .if_not_exists()
                    .col(string(FighterStats::Id).primary_key())
                    .col(integer(FighterStats::Movement))
                    .col(integer(FighterStats::WeaponSkill))
                    .col(integer(FighterStats::BallisticSkill))
                    .col(integer(FighterStats::Strength))
                    .col(integer(FighterStats::Toughness))
                    .col(integer(FighterStats::Wounds))
                    .col(integer(FighterStats::Initiative))
                    .col(integer(FighterStats::Attacks))
                    .col(integer(FighterStats::Leadership))
                    .col(integer(FighterStats::Cool))
                    .col(integer(FighterStats::Will))
                    .col(integer(FighterStats::Intelligence))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FighterStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FighterStats {
    Table,
    Id,
    Movement,
    WeaponSkill,
    BallisticSkill,
    Strength,
    Toughness,
    Wounds,
    Initiative,
    Attacks,
    Leadership,
    Cool,
    Will,
    Intelligence,
}
