//! Service layer for business rules.
//!
//! Services validate create payloads, resolve referenced parents, translate duplicate names
//! into conflicts and own the transaction boundary of every write. Repositories are handed the
//! open transaction so a failed step leaves nothing behind.

pub mod fighter_type;
pub mod resource;
pub mod skill;
pub mod weapon;
