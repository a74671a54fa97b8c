//! HTTP controller endpoints for the roster API.
//!
//! One module per resource, each exposing list, create and delete handlers annotated with
//! utoipa for OpenAPI documentation. Handlers translate HTTP extractors into service calls and
//! leave error translation to [`crate::server::error::Error`].

pub mod faction;
pub mod fighter_category;
pub mod fighter_type;
pub mod game_trait;
pub mod resource;
pub mod skill;
pub mod skill_type;
pub mod weapon;
pub mod weapon_type;
