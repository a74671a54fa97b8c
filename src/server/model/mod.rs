//! Server application models.
//!
//! Application state shared by handlers, database model aliases, and the records repositories
//! assemble when a response needs more than one table.

pub mod app;
pub mod db;
pub mod record;
