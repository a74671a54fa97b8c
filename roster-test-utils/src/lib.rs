//! Test harness for the roster server.
//!
//! Tests configure an in-memory SQLite database with [`TestBuilder`], then insert fixtures
//! through the [`TestContext`] it returns:
//!
//! ```ignore
//! let test = TestBuilder::new().with_roster_tables().build().await?;
//! let weapon_type = test.roster().insert_mock_weapon_type("Basic").await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
