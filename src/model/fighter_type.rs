use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::ConnectDto, resource::ResourceDto};

/// Characteristic profile of a fighter type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FighterStatsDto {
    pub id: String,
    pub movement: i32,
    pub weapon_skill: i32,
    pub ballistic_skill: i32,
    pub strength: i32,
    pub toughness: i32,
    pub wounds: i32,
    pub initiative: i32,
    pub attacks: i32,
    pub leadership: i32,
    pub cool: i32,
    pub will: i32,
    pub intelligence: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FighterTypeDto {
    pub id: String,
    pub name: String,
    pub cost: i32,
    pub faction: ResourceDto,
    pub fighter_category: ResourceDto,
    pub fighter_stats: FighterStatsDto,
}

/// Characteristics of a new fighter type; every value must be positive
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFighterStatsDto {
    pub movement: i32,
    pub weapon_skill: i32,
    pub ballistic_skill: i32,
    pub strength: i32,
    pub toughness: i32,
    pub wounds: i32,
    pub initiative: i32,
    pub attacks: i32,
    pub leadership: i32,
    pub cool: i32,
    pub will: i32,
    pub intelligence: i32,
}

impl CreateFighterStatsDto {
    /// Characteristic names paired with their values, in profile order.
    pub fn characteristics(&self) -> [(&'static str, i32); 12] {
        [
            ("movement", self.movement),
            ("weaponSkill", self.weapon_skill),
            ("ballisticSkill", self.ballistic_skill),
            ("strength", self.strength),
            ("toughness", self.toughness),
            ("wounds", self.wounds),
            ("initiative", self.initiative),
            ("attacks", self.attacks),
            ("leadership", self.leadership),
            ("cool", self.cool),
            ("will", self.will),
            ("intelligence", self.intelligence),
        ]
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFighterTypeDto {
    pub name: String,
    pub cost: i32,
    pub faction: ConnectDto,
    pub fighter_category: ConnectDto,
    pub fighter_stats: CreateFighterStatsDto,
}
