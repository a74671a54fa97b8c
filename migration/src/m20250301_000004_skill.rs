use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000003_skill_type::SkillType;

static IDX_SKILL_TYPE_ID: &str = "idx-skill-type_id";
static FK_SKILL_TYPE_ID: &str = "fk-skill-type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skill::Table)
                    .if_not_exists()
                    .col(string(Skill::Id).primary_key())
                    .col(string_uniq(Skill::Name))
                    .col(string(Skill::TypeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SKILL_TYPE_ID)
                    .table(Skill::Table)
                    .col(Skill::TypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SKILL_TYPE_ID)
                    .from_tbl(Skill::Table)
                    .from_col(Skill::TypeId)
                    .to_tbl(SkillType::Table)
                    .to_col(SkillType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SKILL_TYPE_ID)
                    .table(Skill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SKILL_TYPE_ID)
                    .table(Skill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Skill {
    Table,
    Id,
    Name,
    TypeId,
}
