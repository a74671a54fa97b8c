//! Repository shared by every single-table resource keyed by a unique `name`.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::{api::ListParams, resource::ResourceDto},
    server::data::new_id,
};

/// An entity made of an `id` and a unique `name`.
pub trait NamedEntity: EntityTrait {
    /// Human readable label used in messages, e.g. `weapon type`.
    const LABEL: &'static str;

    fn id_column() -> Self::Column;

    fn active_model(id: String, name: String) -> Self::ActiveModel;

    fn into_dto(model: Self::Model) -> ResourceDto;
}

macro_rules! named_entity {
    ($module:ident, $label:literal) => {
        impl NamedEntity for entity::$module::Entity {
            const LABEL: &'static str = $label;

            fn id_column() -> Self::Column {
                entity::$module::Column::Id
            }

            fn active_model(id: String, name: String) -> Self::ActiveModel {
                entity::$module::ActiveModel {
                    id: ActiveValue::Set(id),
                    name: ActiveValue::Set(name),
                }
            }

            fn into_dto(model: Self::Model) -> ResourceDto {
                ResourceDto {
                    id: model.id,
                    name: model.name,
                }
            }
        }
    };
}

named_entity!(faction, "faction");
named_entity!(fighter_category, "fighter category");
named_entity!(skill_type, "skill type");
named_entity!(game_trait, "trait");
named_entity!(weapon_type, "weapon type");

pub struct ResourceRepository<'a, C: ConnectionTrait, E: NamedEntity> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> ResourceRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: NamedEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Returns rows in creation order, windowed by `params`
    pub async fn get_all(&self, params: &ListParams) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .order_by_asc(E::id_column())
            .offset(params.skip)
            .limit(params.limit())
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<E::Model>, DbErr> {
        E::find().filter(E::id_column().eq(id)).one(self.db).await
    }

    pub async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<E::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        E::find()
            .filter(E::id_column().is_in(ids.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Inserts a row with a newly generated id
    pub async fn create(&self, name: String) -> Result<E::Model, DbErr> {
        E::active_model(new_id(), name).insert(self.db).await
    }

    /// Deletes a row by id
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(self.db)
            .await
    }
}
