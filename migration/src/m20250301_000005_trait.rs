use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trait::Table)
                    .if_not_exists()
                    .col(string(Trait::Id).primary_key())
                    .col(string_uniq(Trait::Name))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trait::Table).to_owned())
            .await?;

        Ok(())
    }
}

/// `trait` table; weapon traits such as Blast, Knockback or Rapid Fire.
#[derive(DeriveIden)]
pub enum Trait {
    Table,
    Id,
    Name,
}
