//! Roster reference data service.
//!
//! - [`model`] - JSON contract shared by the server and its clients
//! - [`server`] - axum + SeaORM REST API
//! - [`client`] - session-scoped list cache with optimistic mutations

pub mod client;
pub mod model;
pub mod server;
