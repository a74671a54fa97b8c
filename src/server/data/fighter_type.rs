use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::{api::ListParams, fighter_type::CreateFighterStatsDto},
    server::{
        data::{new_id, record_not_found},
        model::{
            db::{FighterStatsModel, FighterTypeModel},
            record::FighterTypeRecord,
        },
    },
};

/// Fields of a new fighter type row; parents and stats are referenced by id.
pub struct NewFighterType {
    pub name: String,
    pub cost: i32,
    pub faction_id: String,
    pub fighter_category_id: String,
    pub fighter_stats_id: String,
}

pub struct FighterTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FighterTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns fighter types in creation order with faction, category and stats loaded
    pub async fn get_all(&self, params: &ListParams) -> Result<Vec<FighterTypeRecord>, DbErr> {
        let fighter_types = entity::prelude::FighterType::find()
            .order_by_asc(entity::fighter_type::Column::Id)
            .offset(params.skip)
            .limit(params.limit())
            .all(self.db)
            .await?;

        self.load_records(fighter_types).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<FighterTypeRecord>, DbErr> {
        let Some(fighter_type) = entity::prelude::FighterType::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_records(vec![fighter_type]).await?.pop())
    }

    pub async fn create_stats(
        &self,
        stats: &CreateFighterStatsDto,
    ) -> Result<FighterStatsModel, DbErr> {
        let stats = entity::fighter_stats::ActiveModel {
            id: ActiveValue::Set(new_id()),
            movement: ActiveValue::Set(stats.movement),
            weapon_skill: ActiveValue::Set(stats.weapon_skill),
            ballistic_skill: ActiveValue::Set(stats.ballistic_skill),
            strength: ActiveValue::Set(stats.strength),
            toughness: ActiveValue::Set(stats.toughness),
            wounds: ActiveValue::Set(stats.wounds),
            initiative: ActiveValue::Set(stats.initiative),
            attacks: ActiveValue::Set(stats.attacks),
            leadership: ActiveValue::Set(stats.leadership),
            cool: ActiveValue::Set(stats.cool),
            will: ActiveValue::Set(stats.will),
            intelligence: ActiveValue::Set(stats.intelligence),
        };

        stats.insert(self.db).await
    }

    pub async fn create(&self, fighter_type: NewFighterType) -> Result<FighterTypeModel, DbErr> {
        let fighter_type = entity::fighter_type::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(fighter_type.name),
            cost: ActiveValue::Set(fighter_type.cost),
            faction_id: ActiveValue::Set(fighter_type.faction_id),
            fighter_category_id: ActiveValue::Set(fighter_type.fighter_category_id),
            fighter_stats_id: ActiveValue::Set(fighter_type.fighter_stats_id),
        };

        fighter_type.insert(self.db).await
    }

    /// Deletes the fighter type row only; its stats row must be deleted afterwards
    pub async fn delete(&self, id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::FighterType::delete_by_id(id.to_string())
            .exec(self.db)
            .await
    }

    pub async fn delete_stats(&self, fighter_stats_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::FighterStats::delete_by_id(fighter_stats_id.to_string())
            .exec(self.db)
            .await
    }

    async fn load_records(
        &self,
        fighter_types: Vec<FighterTypeModel>,
    ) -> Result<Vec<FighterTypeRecord>, DbErr> {
        if fighter_types.is_empty() {
            return Ok(Vec::new());
        }

        let faction_ids: Vec<String> = fighter_types.iter().map(|f| f.faction_id.clone()).collect();
        let category_ids: Vec<String> = fighter_types
            .iter()
            .map(|f| f.fighter_category_id.clone())
            .collect();
        let stats_ids: Vec<String> = fighter_types
            .iter()
            .map(|f| f.fighter_stats_id.clone())
            .collect();

        let factions: HashMap<String, _> = entity::prelude::Faction::find()
            .filter(entity::faction::Column::Id.is_in(faction_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();
        let categories: HashMap<String, _> = entity::prelude::FighterCategory::find()
            .filter(entity::fighter_category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();
        let mut stats: HashMap<String, _> = entity::prelude::FighterStats::find()
            .filter(entity::fighter_stats::Column::Id.is_in(stats_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();

        fighter_types
            .into_iter()
            .map(|fighter_type| {
                let faction = factions
                    .get(&fighter_type.faction_id)
                    .cloned()
                    .ok_or_else(|| record_not_found("faction", &fighter_type.faction_id))?;
                let fighter_category = categories
                    .get(&fighter_type.fighter_category_id)
                    .cloned()
                    .ok_or_else(|| {
                        record_not_found("fighter category", &fighter_type.fighter_category_id)
                    })?;
                let fighter_stats = stats
                    .remove(&fighter_type.fighter_stats_id)
                    .ok_or_else(|| {
                        record_not_found("fighter stats", &fighter_type.fighter_stats_id)
                    })?;

                Ok(FighterTypeRecord {
                    fighter_type,
                    faction,
                    fighter_category,
                    fighter_stats,
                })
            })
            .collect()
    }
}
