//! Boundary checks applied to create payloads before anything is written.

use std::collections::HashSet;

use crate::{
    model::{fighter_type::CreateFighterStatsDto, weapon::CreateWeaponStatsDto},
    server::error::resource::ResourceError,
};

/// Trims `name`, rejecting names that are blank once trimmed
pub fn normalize_name(name: &str) -> Result<String, ResourceError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ResourceError::Validation("Name must not be blank".to_string()));
    }

    Ok(name.to_string())
}

pub fn validate_cost(cost: i32) -> Result<(), ResourceError> {
    if cost < 0 {
        return Err(ResourceError::Validation(format!(
            "Cost must not be negative, got {}",
            cost
        )));
    }

    Ok(())
}

/// Every characteristic of a fighter profile must be positive
pub fn validate_fighter_stats(stats: &CreateFighterStatsDto) -> Result<(), ResourceError> {
    for (characteristic, value) in stats.characteristics() {
        if value <= 0 {
            return Err(ResourceError::Validation(format!(
                "Characteristic {} must be positive, got {}",
                characteristic, value
            )));
        }
    }

    Ok(())
}

/// A weapon profile may link each trait at most once
pub fn validate_trait_links(stats: &[CreateWeaponStatsDto]) -> Result<(), ResourceError> {
    for (index, stats) in stats.iter().enumerate() {
        let mut seen = HashSet::new();

        for link in &stats.traits {
            if !seen.insert(link.weapon_trait.id.as_str()) {
                return Err(ResourceError::Validation(format!(
                    "Weapon stats entry {} links trait {} more than once",
                    index, link.weapon_trait.id
                )));
            }
        }
    }

    Ok(())
}
