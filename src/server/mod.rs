//! Server application core modules.
//!
//! HTTP routing, controllers, services and repositories for the roster reference data API,
//! plus configuration and startup helpers used by the `roster` binary.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
