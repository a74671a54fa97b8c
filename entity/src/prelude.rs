pub use super::faction::Entity as Faction;
pub use super::fighter_category::Entity as FighterCategory;
pub use super::fighter_stats::Entity as FighterStats;
pub use super::fighter_type::Entity as FighterType;
pub use super::game_trait::Entity as Trait;
pub use super::skill::Entity as Skill;
pub use super::skill_type::Entity as SkillType;
pub use super::trait_on_weapon_stats::Entity as TraitOnWeaponStats;
pub use super::weapon::Entity as Weapon;
pub use super::weapon_stats::Entity as WeaponStats;
pub use super::weapon_type::Entity as WeaponType;
