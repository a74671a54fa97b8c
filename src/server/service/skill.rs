use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::ListParams,
        skill::{CreateSkillDto, SkillDto},
    },
    server::{
        data::{record_not_found, resource::ResourceRepository, skill::SkillRepository},
        error::{map_unique_violation, Error},
        model::{
            db::{SkillModel, SkillTypeModel},
            record::SkillRecord,
        },
        util::validate::normalize_name,
    },
};

const LABEL: &str = "skill";

pub struct SkillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SkillService<'a> {
    /// Creates a new instance of [`SkillService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, params: &ListParams) -> Result<Vec<SkillDto>, Error> {
        let skills = SkillRepository::new(self.db).get_all(params).await?;

        skills
            .into_iter()
            .map(|(skill, skill_type)| Ok(to_record(skill, skill_type)?.into()))
            .collect()
    }

    /// Creates a skill attached to an existing skill type
    ///
    /// The skill type is looked up in the same transaction as the insert; an unknown id fails
    /// with [`sea_orm::DbErr::RecordNotFound`].
    pub async fn create(&self, dto: CreateSkillDto) -> Result<SkillDto, Error> {
        let name = normalize_name(&dto.name)?;

        let txn = self.db.begin().await?;

        let skill_type = ResourceRepository::<_, entity::prelude::SkillType>::new(&txn)
            .find_by_id(&dto.skill_type.id)
            .await?
            .ok_or_else(|| record_not_found("skill type", &dto.skill_type.id))?;

        let skill = SkillRepository::new(&txn)
            .create(name.clone(), skill_type.id.clone())
            .await
            .map_err(|err| map_unique_violation(err, LABEL, &name))?;

        txn.commit().await?;

        tracing::debug!("Created skill {} ({})", skill.name, skill.id);

        Ok(SkillRecord { skill, skill_type }.into())
    }

    pub async fn delete(&self, id: &str) -> Result<SkillDto, Error> {
        let txn = self.db.begin().await?;
        let repository = SkillRepository::new(&txn);

        let (skill, skill_type) = repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| record_not_found(LABEL, id))?;
        let record = to_record(skill, skill_type)?;

        repository.delete(id).await?;
        txn.commit().await?;

        tracing::debug!("Deleted skill {}", id);

        Ok(record.into())
    }
}

fn to_record(
    skill: SkillModel,
    skill_type: Option<SkillTypeModel>,
) -> Result<SkillRecord, Error> {
    let skill_type = skill_type.ok_or_else(|| record_not_found("skill type", &skill.type_id))?;

    Ok(SkillRecord { skill, skill_type })
}
