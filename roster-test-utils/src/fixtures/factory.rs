//! Factory functions for in-memory entity models.
//!
//! Models are built with standard test values and no database interaction.

use entity::{fighter_stats, weapon_stats};

/// Fighter profile with every characteristic positive.
pub fn mock_fighter_stats_model(id: &str) -> fighter_stats::Model {
    fighter_stats::Model {
        id: id.to_string(),
        movement: 5,
        weapon_skill: 4,
        ballistic_skill: 4,
        strength: 3,
        toughness: 3,
        wounds: 1,
        initiative: 4,
        attacks: 1,
        leadership: 7,
        cool: 7,
        will: 7,
        intelligence: 7,
    }
}

/// Weapon profile owned by `weapon_id`, described as `description`.
pub fn mock_weapon_stats_model(id: &str, weapon_id: &str, description: &str) -> weapon_stats::Model {
    weapon_stats::Model {
        id: id.to_string(),
        weapon_id: weapon_id.to_string(),
        description: description.to_string(),
        range_short: "8\"".to_string(),
        range_long: "24\"".to_string(),
        accuracy_short: "+1".to_string(),
        accuracy_long: "-".to_string(),
        strength: "3".to_string(),
        armour_penetration: "-".to_string(),
        damage: "1".to_string(),
        ammo: "4+".to_string(),
        is_default: true,
        is_ammo: false,
        combi_type: None,
    }
}
