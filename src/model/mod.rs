//! JSON models exchanged over the HTTP API.
//!
//! Field names are camelCase on the wire. Create payloads reference existing parents by id
//! through [`api::ConnectDto`]; response models carry the eager-loaded graph.

pub mod api;
pub mod fighter_type;
pub mod resource;
pub mod skill;
pub mod weapon;
