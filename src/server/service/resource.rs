use std::marker::PhantomData;

use sea_orm::{DatabaseConnection, IntoActiveModel, TransactionTrait};

use crate::{
    model::{
        api::ListParams,
        resource::{CreateResourceDto, ResourceDto},
    },
    server::{
        data::{
            record_not_found,
            resource::{NamedEntity, ResourceRepository},
        },
        error::{map_unique_violation, Error},
        util::validate::normalize_name,
    },
};

/// List, create and delete for an entity made only of an id and a unique name.
///
/// Instantiated once per reference table: factions, fighter categories, skill types, traits
/// and weapon types.
pub struct ResourceService<'a, E: NamedEntity> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> ResourceService<'a, E>
where
    E: NamedEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
{
    /// Creates a new instance of [`ResourceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn get_all(&self, params: &ListParams) -> Result<Vec<ResourceDto>, Error> {
        let repository = ResourceRepository::<_, E>::new(self.db);

        let models = repository.get_all(params).await?;

        Ok(models.into_iter().map(E::into_dto).collect())
    }

    /// Creates a row with the trimmed name
    ///
    /// # Returns
    /// - `Ok(ResourceDto)` - The created row
    /// - `Err(Error::ResourceError)` - Blank name, or a row with the same name already exists
    /// - `Err(Error::DbErr)` - Any other database error, unchanged
    pub async fn create(&self, dto: CreateResourceDto) -> Result<ResourceDto, Error> {
        let name = normalize_name(&dto.name)?;
        let repository = ResourceRepository::<_, E>::new(self.db);

        let model = repository
            .create(name.clone())
            .await
            .map_err(|err| map_unique_violation(err, E::LABEL, &name))?;

        let dto = E::into_dto(model);
        tracing::debug!("Created {} {} ({})", E::LABEL, dto.name, dto.id);

        Ok(dto)
    }

    /// Deletes the row and returns it as it was before deletion
    ///
    /// Fails with [`sea_orm::DbErr::RecordNotFound`] when no row has the given id.
    pub async fn delete(&self, id: &str) -> Result<ResourceDto, Error> {
        let txn = self.db.begin().await?;
        let repository = ResourceRepository::<_, E>::new(&txn);

        let model = repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| record_not_found(E::LABEL, id))?;

        repository.delete(id).await?;
        txn.commit().await?;

        tracing::debug!("Deleted {} {}", E::LABEL, id);

        Ok(E::into_dto(model))
    }
}
