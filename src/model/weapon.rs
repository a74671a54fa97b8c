use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::ConnectDto, resource::ResourceDto};

/// A weapon with its type and every firing profile, each with its linked traits
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDto {
    pub id: String,
    pub name: String,
    pub weapon_type: ResourceDto,
    pub weapon_stats: Vec<WeaponStatsDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeaponStatsDto {
    pub id: String,
    pub weapon_id: String,
    pub description: String,
    pub range_short: String,
    pub range_long: String,
    pub accuracy_short: String,
    pub accuracy_long: String,
    pub strength: String,
    pub armour_penetration: String,
    pub damage: String,
    pub ammo: String,
    pub is_default: bool,
    pub is_ammo: bool,
    pub combi_type: Option<String>,
    pub traits: Vec<TraitOnWeaponStatsDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TraitOnWeaponStatsDto {
    pub weapon_stats_id: String,
    pub trait_id: String,
    pub modifier: i32,
    #[serde(rename = "trait")]
    pub weapon_trait: ResourceDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeaponDto {
    pub name: String,
    /// Existing weapon type the weapon belongs to
    pub weapon_type: ConnectDto,
    /// Firing profiles, persisted in the order given
    pub weapon_stats: Vec<CreateWeaponStatsDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeaponStatsDto {
    pub description: String,
    pub range_short: String,
    pub range_long: String,
    pub accuracy_short: String,
    pub accuracy_long: String,
    pub strength: String,
    pub armour_penetration: String,
    pub damage: String,
    pub ammo: String,
    pub is_default: bool,
    pub is_ammo: bool,
    #[serde(default)]
    pub combi_type: Option<String>,
    #[serde(default)]
    pub traits: Vec<TraitLinkDto>,
}

/// Link from a new firing profile to an existing trait
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TraitLinkDto {
    pub modifier: i32,
    #[serde(rename = "trait")]
    pub weapon_trait: ConnectDto,
}
