use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::api::ListParams,
    server::{
        data::new_id,
        model::db::{SkillModel, SkillTypeModel},
    },
};

pub struct SkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns skills in creation order, each paired with its skill type
    pub async fn get_all(
        &self,
        params: &ListParams,
    ) -> Result<Vec<(SkillModel, Option<SkillTypeModel>)>, DbErr> {
        entity::prelude::Skill::find()
            .find_also_related(entity::prelude::SkillType)
            .order_by_asc(entity::skill::Column::Id)
            .offset(params.skip)
            .limit(params.limit())
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<(SkillModel, Option<SkillTypeModel>)>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::Id.eq(id))
            .find_also_related(entity::prelude::SkillType)
            .one(self.db)
            .await
    }

    pub async fn create(&self, name: String, type_id: String) -> Result<SkillModel, DbErr> {
        let skill = entity::skill::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name),
            type_id: ActiveValue::Set(type_id),
        };

        skill.insert(self.db).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Skill::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }
}
