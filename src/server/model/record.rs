//! Multi-table records loaded by repositories and their API representations.

use crate::{
    model::{
        fighter_type::{FighterStatsDto, FighterTypeDto},
        resource::ResourceDto,
        skill::SkillDto,
        weapon::{TraitOnWeaponStatsDto, WeaponDto, WeaponStatsDto},
    },
    server::model::db::{
        FactionModel, FighterCategoryModel, FighterStatsModel, FighterTypeModel, SkillModel,
        SkillTypeModel, TraitModel, TraitOnWeaponStatsModel, WeaponModel, WeaponStatsModel,
        WeaponTypeModel,
    },
};

/// A skill with its skill type.
#[derive(Clone, Debug)]
pub struct SkillRecord {
    pub skill: SkillModel,
    pub skill_type: SkillTypeModel,
}

/// A fighter type with its parents and its owned characteristic profile.
#[derive(Clone, Debug)]
pub struct FighterTypeRecord {
    pub fighter_type: FighterTypeModel,
    pub faction: FactionModel,
    pub fighter_category: FighterCategoryModel,
    pub fighter_stats: FighterStatsModel,
}

/// The full weapon aggregate: weapon, weapon type, profiles and trait links.
#[derive(Clone, Debug)]
pub struct WeaponRecord {
    pub weapon: WeaponModel,
    pub weapon_type: WeaponTypeModel,
    pub weapon_stats: Vec<WeaponStatsRecord>,
}

/// One weapon profile with its trait links, each paired with the linked trait.
#[derive(Clone, Debug)]
pub struct WeaponStatsRecord {
    pub stats: WeaponStatsModel,
    pub traits: Vec<(TraitOnWeaponStatsModel, TraitModel)>,
}

impl WeaponRecord {
    /// Ids of every profile owned by the weapon.
    pub fn weapon_stats_ids(&self) -> Vec<String> {
        self.weapon_stats
            .iter()
            .map(|s| s.stats.id.clone())
            .collect()
    }
}

fn resource_dto(id: String, name: String) -> ResourceDto {
    ResourceDto { id, name }
}

impl From<SkillRecord> for SkillDto {
    fn from(record: SkillRecord) -> Self {
        Self {
            id: record.skill.id,
            name: record.skill.name,
            skill_type: resource_dto(record.skill_type.id, record.skill_type.name),
        }
    }
}

impl From<FighterStatsModel> for FighterStatsDto {
    fn from(stats: FighterStatsModel) -> Self {
        Self {
            id: stats.id,
            movement: stats.movement,
            weapon_skill: stats.weapon_skill,
            ballistic_skill: stats.ballistic_skill,
            strength: stats.strength,
            toughness: stats.toughness,
            wounds: stats.wounds,
            initiative: stats.initiative,
            attacks: stats.attacks,
            leadership: stats.leadership,
            cool: stats.cool,
            will: stats.will,
            intelligence: stats.intelligence,
        }
    }
}

impl From<FighterTypeRecord> for FighterTypeDto {
    fn from(record: FighterTypeRecord) -> Self {
        Self {
            id: record.fighter_type.id,
            name: record.fighter_type.name,
            cost: record.fighter_type.cost,
            faction: resource_dto(record.faction.id, record.faction.name),
            fighter_category: resource_dto(
                record.fighter_category.id,
                record.fighter_category.name,
            ),
            fighter_stats: record.fighter_stats.into(),
        }
    }
}

impl From<WeaponStatsRecord> for WeaponStatsDto {
    fn from(record: WeaponStatsRecord) -> Self {
        let stats = record.stats;

        Self {
            id: stats.id,
            weapon_id: stats.weapon_id,
            description: stats.description,
            range_short: stats.range_short,
            range_long: stats.range_long,
            accuracy_short: stats.accuracy_short,
            accuracy_long: stats.accuracy_long,
            strength: stats.strength,
            armour_penetration: stats.armour_penetration,
            damage: stats.damage,
            ammo: stats.ammo,
            is_default: stats.is_default,
            is_ammo: stats.is_ammo,
            combi_type: stats.combi_type,
            traits: record
                .traits
                .into_iter()
                .map(|(link, weapon_trait)| TraitOnWeaponStatsDto {
                    weapon_stats_id: link.weapon_stats_id,
                    trait_id: link.trait_id,
                    modifier: link.modifier,
                    weapon_trait: resource_dto(weapon_trait.id, weapon_trait.name),
                })
                .collect(),
        }
    }
}

impl From<WeaponRecord> for WeaponDto {
    fn from(record: WeaponRecord) -> Self {
        Self {
            id: record.weapon.id,
            name: record.weapon.name,
            weapon_type: resource_dto(record.weapon_type.id, record.weapon_type.name),
            weapon_stats: record.weapon_stats.into_iter().map(Into::into).collect(),
        }
    }
}
