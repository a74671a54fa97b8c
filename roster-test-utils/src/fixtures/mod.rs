//! Fixtures inserted into the test database during test execution.
//!
//! - `factory` - Pure functions returning in-memory entity models with standard test values
//! - `roster` - Database insertion of reference rows and full aggregates

pub mod factory;
pub mod roster;

use crate::TestContext;

impl TestContext {
    pub fn roster(&self) -> RosterFixtures<'_> {
        RosterFixtures { context: self }
    }
}

pub struct RosterFixtures<'a> {
    pub context: &'a TestContext,
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
