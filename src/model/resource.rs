use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named reference row: faction, fighter category, skill type, trait or weapon type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceDto {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateResourceDto {
    pub name: String,
}

impl CreateResourceDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
