//! Persistence of the weapon aggregate: weapon, weapon profiles and their trait links.
//!
//! The repository exposes each level as a separate step. Callers run the steps inside one
//! transaction: create parent before children, delete children before parent.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::{
        api::ListParams,
        weapon::{CreateWeaponStatsDto, TraitLinkDto},
    },
    server::{
        data::{new_id, record_not_found},
        model::{
            db::{TraitOnWeaponStatsModel, WeaponModel, WeaponStatsModel},
            record::{WeaponRecord, WeaponStatsRecord},
        },
    },
};

pub struct WeaponRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WeaponRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns weapons in creation order with the full aggregate loaded
    pub async fn get_all(&self, params: &ListParams) -> Result<Vec<WeaponRecord>, DbErr> {
        let weapons = entity::prelude::Weapon::find()
            .order_by_asc(entity::weapon::Column::Id)
            .offset(params.skip)
            .limit(params.limit())
            .all(self.db)
            .await?;

        self.load_records(weapons).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<WeaponRecord>, DbErr> {
        let Some(weapon) = entity::prelude::Weapon::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_records(vec![weapon]).await?.pop())
    }

    /// Inserts the weapon row attached to an existing weapon type
    pub async fn create(&self, name: String, weapon_type_id: String) -> Result<WeaponModel, DbErr> {
        let weapon = entity::weapon::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name),
            weapon_type_id: ActiveValue::Set(weapon_type_id),
        };

        weapon.insert(self.db).await
    }

    /// Inserts one profile owned by `weapon_id`
    pub async fn create_stats(
        &self,
        weapon_id: &str,
        stats: &CreateWeaponStatsDto,
    ) -> Result<WeaponStatsModel, DbErr> {
        let stats = entity::weapon_stats::ActiveModel {
            id: ActiveValue::Set(new_id()),
            weapon_id: ActiveValue::Set(weapon_id.to_string()),
            description: ActiveValue::Set(stats.description.clone()),
            range_short: ActiveValue::Set(stats.range_short.clone()),
            range_long: ActiveValue::Set(stats.range_long.clone()),
            accuracy_short: ActiveValue::Set(stats.accuracy_short.clone()),
            accuracy_long: ActiveValue::Set(stats.accuracy_long.clone()),
            strength: ActiveValue::Set(stats.strength.clone()),
            armour_penetration: ActiveValue::Set(stats.armour_penetration.clone()),
            damage: ActiveValue::Set(stats.damage.clone()),
            ammo: ActiveValue::Set(stats.ammo.clone()),
            is_default: ActiveValue::Set(stats.is_default),
            is_ammo: ActiveValue::Set(stats.is_ammo),
            combi_type: ActiveValue::Set(stats.combi_type.clone()),
        };

        stats.insert(self.db).await
    }

    /// Inserts the trait links of one profile
    pub async fn create_trait_links(
        &self,
        weapon_stats_id: &str,
        links: &[TraitLinkDto],
    ) -> Result<Vec<TraitOnWeaponStatsModel>, DbErr> {
        let mut created = Vec::with_capacity(links.len());

        for link in links {
            let link = entity::trait_on_weapon_stats::ActiveModel {
                weapon_stats_id: ActiveValue::Set(weapon_stats_id.to_string()),
                trait_id: ActiveValue::Set(link.weapon_trait.id.clone()),
                modifier: ActiveValue::Set(link.modifier),
            };

            created.push(link.insert(self.db).await?);
        }

        Ok(created)
    }

    /// Deletes every trait link owned by the given profiles
    pub async fn delete_trait_links(
        &self,
        weapon_stats_ids: Vec<String>,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::TraitOnWeaponStats::delete_many()
            .filter(entity::trait_on_weapon_stats::Column::WeaponStatsId.is_in(weapon_stats_ids))
            .exec(self.db)
            .await
    }

    /// Deletes every profile owned by `weapon_id`
    pub async fn delete_stats(&self, weapon_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::WeaponStats::delete_many()
            .filter(entity::weapon_stats::Column::WeaponId.eq(weapon_id))
            .exec(self.db)
            .await
    }

    /// Deletes the weapon row only; profiles and links must already be gone
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Weapon::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }

    /// Loads weapon types, profiles, links and traits for `weapons` with one query per table
    async fn load_records(&self, weapons: Vec<WeaponModel>) -> Result<Vec<WeaponRecord>, DbErr> {
        if weapons.is_empty() {
            return Ok(Vec::new());
        }

        let weapon_ids: Vec<String> = weapons.iter().map(|w| w.id.clone()).collect();
        let weapon_type_ids: Vec<String> =
            weapons.iter().map(|w| w.weapon_type_id.clone()).collect();

        let weapon_types: HashMap<String, _> = entity::prelude::WeaponType::find()
            .filter(entity::weapon_type::Column::Id.is_in(weapon_type_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

        let stats = entity::prelude::WeaponStats::find()
            .filter(entity::weapon_stats::Column::WeaponId.is_in(weapon_ids))
            .order_by_asc(entity::weapon_stats::Column::Id)
            .all(self.db)
            .await?;

        let mut links_by_stats = self.load_trait_links(&stats).await?;

        let mut stats_by_weapon: HashMap<String, Vec<WeaponStatsRecord>> = HashMap::new();
        for stats in stats {
            let traits = links_by_stats.remove(&stats.id).unwrap_or_default();

            stats_by_weapon
                .entry(stats.weapon_id.clone())
                .or_default()
                .push(WeaponStatsRecord { stats, traits });
        }

        weapons
            .into_iter()
            .map(|weapon| {
                let weapon_type = weapon_types
                    .get(&weapon.weapon_type_id)
                    .cloned()
                    .ok_or_else(|| record_not_found("weapon type", &weapon.weapon_type_id))?;
                let weapon_stats = stats_by_weapon.remove(&weapon.id).unwrap_or_default();

                Ok(WeaponRecord {
                    weapon,
                    weapon_type,
                    weapon_stats,
                })
            })
            .collect()
    }

    async fn load_trait_links(
        &self,
        stats: &[WeaponStatsModel],
    ) -> Result<HashMap<String, Vec<(TraitOnWeaponStatsModel, entity::game_trait::Model)>>, DbErr>
    {
        let mut links_by_stats = HashMap::new();

        if stats.is_empty() {
            return Ok(links_by_stats);
        }

        let stats_ids: Vec<String> = stats.iter().map(|s| s.id.clone()).collect();

        let links = entity::prelude::TraitOnWeaponStats::find()
            .filter(entity::trait_on_weapon_stats::Column::WeaponStatsId.is_in(stats_ids))
            .order_by_asc(entity::trait_on_weapon_stats::Column::TraitId)
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(links_by_stats);
        }

        let trait_ids: Vec<String> = links.iter().map(|l| l.trait_id.clone()).collect();
        let traits: HashMap<String, _> = entity::prelude::Trait::find()
            .filter(entity::game_trait::Column::Id.is_in(trait_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

        for link in links {
            let weapon_trait = traits
                .get(&link.trait_id)
                .cloned()
                .ok_or_else(|| record_not_found("trait", &link.trait_id))?;

            links_by_stats
                .entry(link.weapon_stats_id.clone())
                .or_insert_with(Vec::new)
                .push((link, weapon_trait));
        }

        Ok(links_by_stats)
    }
}
