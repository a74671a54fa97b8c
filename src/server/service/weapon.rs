use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::ListParams,
        weapon::{CreateWeaponDto, WeaponDto},
    },
    server::{
        data::{record_not_found, resource::ResourceRepository, weapon::WeaponRepository},
        error::{map_unique_violation, Error},
        util::validate::{normalize_name, validate_trait_links},
    },
};

const LABEL: &str = "weapon";

/// Manages a weapon, its profiles and their trait links as one unit.
pub struct WeaponService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeaponService<'a> {
    /// Creates a new instance of [`WeaponService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every weapon with its type, profiles, trait links and linked traits
    pub async fn get_all(&self, params: &ListParams) -> Result<Vec<WeaponDto>, Error> {
        let records = WeaponRepository::new(self.db).get_all(params).await?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Creates a weapon with all of its profiles and trait links in one transaction
    ///
    /// The weapon type and every linked trait must already exist. The weapon row is written
    /// first, then each profile in the order given followed by that profile's trait links.
    /// If any step fails the transaction is dropped and nothing is persisted.
    ///
    /// # Arguments
    /// - `dto` - Weapon name, weapon type id and profiles
    ///
    /// # Returns
    /// - `Ok(WeaponDto)` - The created weapon, in the same shape as [`Self::get_all`]
    /// - `Err(Error::ResourceError)` - Blank name, a trait linked twice on one profile, or a
    ///   weapon with the same name already exists
    /// - `Err(Error::DbErr)` - Unknown weapon type or trait, or any other database error
    pub async fn create(&self, dto: CreateWeaponDto) -> Result<WeaponDto, Error> {
        let name = normalize_name(&dto.name)?;
        validate_trait_links(&dto.weapon_stats)?;

        let txn = self.db.begin().await?;
        let repository = WeaponRepository::new(&txn);

        let weapon_type = ResourceRepository::<_, entity::prelude::WeaponType>::new(&txn)
            .find_by_id(&dto.weapon_type.id)
            .await?
            .ok_or_else(|| record_not_found("weapon type", &dto.weapon_type.id))?;

        let mut trait_ids: Vec<String> = dto
            .weapon_stats
            .iter()
            .flat_map(|stats| stats.traits.iter().map(|link| link.weapon_trait.id.clone()))
            .collect();
        trait_ids.sort();
        trait_ids.dedup();

        let found: HashSet<String> = ResourceRepository::<_, entity::prelude::Trait>::new(&txn)
            .find_by_ids(&trait_ids)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();
        if let Some(missing) = trait_ids.iter().find(|id| !found.contains(*id)) {
            return Err(record_not_found("trait", missing).into());
        }

        let weapon = repository
            .create(name.clone(), weapon_type.id)
            .await
            .map_err(|err| map_unique_violation(err, LABEL, &name))?;

        for stats in &dto.weapon_stats {
            let weapon_stats = repository.create_stats(&weapon.id, stats).await?;

            repository
                .create_trait_links(&weapon_stats.id, &stats.traits)
                .await?;
        }

        let record = repository
            .find_by_id(&weapon.id)
            .await?
            .ok_or_else(|| record_not_found(LABEL, &weapon.id))?;

        txn.commit().await?;

        tracing::debug!(
            "Created weapon {} ({}) with {} weapon stats",
            record.weapon.name,
            record.weapon.id,
            record.weapon_stats.len()
        );

        Ok(record.into())
    }

    /// Deletes a weapon and everything it owns, innermost rows first
    ///
    /// Reads the weapon with its profiles, deletes the trait links of those profiles, then the
    /// profiles, then the weapon itself, all in one transaction. Linked traits and the weapon
    /// type are left untouched.
    ///
    /// # Returns
    /// - `Ok(WeaponDto)` - The weapon as it was immediately before deletion
    /// - `Err(Error::DbErr)` - [`sea_orm::DbErr::RecordNotFound`] when no weapon has the given
    ///   id, or any other database error
    pub async fn delete(&self, id: &str) -> Result<WeaponDto, Error> {
        let txn = self.db.begin().await?;
        let repository = WeaponRepository::new(&txn);

        let record = repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| record_not_found(LABEL, id))?;

        let links = repository
            .delete_trait_links(record.weapon_stats_ids())
            .await?;
        let stats = repository.delete_stats(id).await?;
        repository.delete(id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted weapon {} with {} weapon stats and {} trait links",
            id,
            stats.rows_affected,
            links.rows_affected
        );

        Ok(record.into())
    }
}
