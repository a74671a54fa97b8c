//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate.

pub type FactionModel = entity::faction::Model;
pub type FighterCategoryModel = entity::fighter_category::Model;
pub type FighterStatsModel = entity::fighter_stats::Model;
pub type FighterTypeModel = entity::fighter_type::Model;
pub type SkillModel = entity::skill::Model;
pub type SkillTypeModel = entity::skill_type::Model;
pub type TraitModel = entity::game_trait::Model;
pub type WeaponTypeModel = entity::weapon_type::Model;
pub type WeaponModel = entity::weapon::Model;
pub type WeaponStatsModel = entity::weapon_stats::Model;

/// Join row between a weapon profile and a trait.
///
/// # Fields (from `entity::trait_on_weapon_stats::Model`)
/// - `weapon_stats_id` - Owning weapon profile, part of the primary key
/// - `trait_id` - Linked trait, part of the primary key
/// - `modifier` - Numeric modifier of the trait for this profile
pub type TraitOnWeaponStatsModel = entity::trait_on_weapon_stats::Model;
