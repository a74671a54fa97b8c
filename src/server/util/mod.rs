//! Helpers shared by services.

pub mod validate;
