//! SeaORM entities for the roster reference data tables.

pub mod prelude;

pub mod faction;
pub mod fighter_category;
pub mod fighter_stats;
pub mod fighter_type;
pub mod game_trait;
pub mod skill;
pub mod skill_type;
pub mod trait_on_weapon_stats;
pub mod weapon;
pub mod weapon_stats;
pub mod weapon_type;
