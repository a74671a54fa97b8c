use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::ListParams,
        fighter_type::{CreateFighterTypeDto, FighterTypeDto},
    },
    server::{
        data::{
            fighter_type::{FighterTypeRepository, NewFighterType},
            record_not_found,
            resource::ResourceRepository,
        },
        error::{map_unique_violation, Error},
        model::record::FighterTypeRecord,
        util::validate::{normalize_name, validate_cost, validate_fighter_stats},
    },
};

const LABEL: &str = "fighter type";

pub struct FighterTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FighterTypeService<'a> {
    /// Creates a new instance of [`FighterTypeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, params: &ListParams) -> Result<Vec<FighterTypeDto>, Error> {
        let records = FighterTypeRepository::new(self.db).get_all(params).await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Creates a fighter type together with its characteristic profile
    ///
    /// Faction and fighter category are resolved by id, then the stats row and the fighter
    /// type row are inserted, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(FighterTypeDto)` - The created fighter type with faction, category and stats
    /// - `Err(Error::ResourceError)` - Invalid payload or duplicate name
    /// - `Err(Error::DbErr)` - Unknown faction or category, or any other database error
    pub async fn create(&self, dto: CreateFighterTypeDto) -> Result<FighterTypeDto, Error> {
        let name = normalize_name(&dto.name)?;
        validate_cost(dto.cost)?;
        validate_fighter_stats(&dto.fighter_stats)?;

        let txn = self.db.begin().await?;
        let repository = FighterTypeRepository::new(&txn);

        let faction = ResourceRepository::<_, entity::prelude::Faction>::new(&txn)
            .find_by_id(&dto.faction.id)
            .await?
            .ok_or_else(|| record_not_found("faction", &dto.faction.id))?;
        let fighter_category = ResourceRepository::<_, entity::prelude::FighterCategory>::new(&txn)
            .find_by_id(&dto.fighter_category.id)
            .await?
            .ok_or_else(|| record_not_found("fighter category", &dto.fighter_category.id))?;

        let fighter_stats = repository.create_stats(&dto.fighter_stats).await?;

        let fighter_type = repository
            .create(NewFighterType {
                name: name.clone(),
                cost: dto.cost,
                faction_id: faction.id.clone(),
                fighter_category_id: fighter_category.id.clone(),
                fighter_stats_id: fighter_stats.id.clone(),
            })
            .await
            .map_err(|err| map_unique_violation(err, LABEL, &name))?;

        txn.commit().await?;

        tracing::debug!("Created fighter type {} ({})", fighter_type.name, fighter_type.id);

        Ok(FighterTypeRecord {
            fighter_type,
            faction,
            fighter_category,
            fighter_stats,
        }
        .into())
    }

    /// Deletes the fighter type, then the stats row it owns
    pub async fn delete(&self, id: &str) -> Result<FighterTypeDto, Error> {
        let txn = self.db.begin().await?;
        let repository = FighterTypeRepository::new(&txn);

        let record = repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| record_not_found(LABEL, id))?;

        repository.delete(id).await?;
        repository.delete_stats(&record.fighter_stats.id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted fighter type {}", id);

        Ok(record.into())
    }
}
