//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so services can run them either
//! on the pooled connection or inside a transaction they own.

pub mod fighter_type;
pub mod resource;
pub mod skill;
pub mod weapon;

use sea_orm::DbErr;
use uuid::Uuid;

/// Generates the id of a new row.
///
/// UUIDv7 values sort in creation order, which is the order lists are returned in.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

/// Storage-level error for a referenced row that does not exist.
pub fn record_not_found(label: &str, id: &str) -> DbErr {
    DbErr::RecordNotFound(format!("No {} found with id {}", label, id))
}
