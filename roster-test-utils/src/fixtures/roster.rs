//! Roster row insertion utilities.
//!
//! Reference rows are inserted by name. Aggregates take the ids of parents inserted
//! beforehand, so a test decides exactly which parents exist.

use sea_orm::{ActiveModelTrait, ActiveValue};

use entity::{
    faction, fighter_category, fighter_stats, fighter_type, game_trait, skill, skill_type,
    trait_on_weapon_stats, weapon, weapon_stats, weapon_type,
};

use crate::{
    error::TestError,
    fixtures::{
        factory::{mock_fighter_stats_model, mock_weapon_stats_model},
        new_id, RosterFixtures,
    },
};

/// Weapon inserted by [`RosterFixtures::insert_mock_weapon`] with its owned rows.
pub struct MockWeapon {
    pub weapon: weapon::Model,
    pub weapon_stats: Vec<weapon_stats::Model>,
    pub trait_links: Vec<trait_on_weapon_stats::Model>,
}

impl<'a> RosterFixtures<'a> {
    pub async fn insert_mock_faction(&self, name: &str) -> Result<faction::Model, TestError> {
        let faction = faction::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
        };

        Ok(faction.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_fighter_category(
        &self,
        name: &str,
    ) -> Result<fighter_category::Model, TestError> {
        let fighter_category = fighter_category::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
        };

        Ok(fighter_category.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_skill_type(&self, name: &str) -> Result<skill_type::Model, TestError> {
        let skill_type = skill_type::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
        };

        Ok(skill_type.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_trait(&self, name: &str) -> Result<game_trait::Model, TestError> {
        let weapon_trait = game_trait::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
        };

        Ok(weapon_trait.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_weapon_type(
        &self,
        name: &str,
    ) -> Result<weapon_type::Model, TestError> {
        let weapon_type = weapon_type::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
        };

        Ok(weapon_type.insert(&self.context.db).await?)
    }

    /// Insert a skill belonging to an existing skill type.
    pub async fn insert_mock_skill(
        &self,
        name: &str,
        type_id: &str,
    ) -> Result<skill::Model, TestError> {
        let skill = skill::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
            type_id: ActiveValue::Set(type_id.to_string()),
        };

        Ok(skill.insert(&self.context.db).await?)
    }

    /// Insert a fighter type and the stats row it owns.
    ///
    /// # Returns
    /// - `Ok((fighter_type, fighter_stats))` - The inserted rows
    /// - `Err(TestError::DbErr)` - Unknown faction or category, or duplicate name
    pub async fn insert_mock_fighter_type(
        &self,
        name: &str,
        faction_id: &str,
        fighter_category_id: &str,
    ) -> Result<(fighter_type::Model, fighter_stats::Model), TestError> {
        let stats = mock_fighter_stats_model(&new_id());
        let stats = fighter_stats::ActiveModel {
            id: ActiveValue::Set(stats.id),
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
        }
        .insert(&self.context.db)
        .await?;

        let fighter_type = fighter_type::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
            cost: ActiveValue::Set(50),
            faction_id: ActiveValue::Set(faction_id.to_string()),
            fighter_category_id: ActiveValue::Set(fighter_category_id.to_string()),
            fighter_stats_id: ActiveValue::Set(stats.id.clone()),
        }
        .insert(&self.context.db)
        .await?;

        Ok((fighter_type, stats))
    }

    /// Insert a weapon with `stats_count` profiles, each linked to every trait in `trait_ids`.
    ///
    /// The weapon type and traits must already exist.
    pub async fn insert_mock_weapon(
        &self,
        name: &str,
        weapon_type_id: &str,
        stats_count: usize,
        trait_ids: &[&str],
    ) -> Result<MockWeapon, TestError> {
        let weapon = weapon::ActiveModel {
            id: ActiveValue::Set(new_id()),
            name: ActiveValue::Set(name.to_string()),
            weapon_type_id: ActiveValue::Set(weapon_type_id.to_string()),
        }
        .insert(&self.context.db)
        .await?;

        let mut weapon_stats = Vec::with_capacity(stats_count);
        let mut trait_links = Vec::with_capacity(stats_count * trait_ids.len());

        for index in 0..stats_count {
            let stats =
                mock_weapon_stats_model(&new_id(), &weapon.id, &format!("Profile {}", index));
            let stats = weapon_stats::ActiveModel {
                id: ActiveValue::Set(stats.id),
                weapon_id: ActiveValue::Set(stats.weapon_id),
                description: ActiveValue::Set(stats.description),
                range_short: ActiveValue::Set(stats.range_short),
                range_long: ActiveValue::Set(stats.range_long),
                accuracy_short: ActiveValue::Set(stats.accuracy_short),
                accuracy_long: ActiveValue::Set(stats.accuracy_long),
                strength: ActiveValue::Set(stats.strength),
                armour_penetration: ActiveValue::Set(stats.armour_penetration),
                damage: ActiveValue::Set(stats.damage),
                ammo: ActiveValue::Set(stats.ammo),
                is_default: ActiveValue::Set(index == 0),
                is_ammo: ActiveValue::Set(stats.is_ammo),
                combi_type: ActiveValue::Set(stats.combi_type),
            }
            .insert(&self.context.db)
            .await?;

            for trait_id in trait_ids {
                let link = trait_on_weapon_stats::ActiveModel {
                    weapon_stats_id: ActiveValue::Set(stats.id.clone()),
                    trait_id: ActiveValue::Set(trait_id.to_string()),
                    modifier: ActiveValue::Set(0),
                }
                .insert(&self.context.db)
                .await?;

                trait_links.push(link);
            }

            weapon_stats.push(stats);
        }

        Ok(MockWeapon {
            weapon,
            weapon_stats,
            trait_links,
        })
    }
}
