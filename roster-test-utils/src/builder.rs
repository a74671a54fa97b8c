//! Declarative test database setup.
//!
//! Methods queue work that is executed by the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for an in-memory test database.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_roster_tables: bool,
}

impl TestBuilder {
    /// Create a builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_roster_tables: false,
        }
    }

    /// Add every roster table, parents before children.
    pub fn with_roster_tables(mut self) -> Self {
        self.include_roster_tables = true;
        self
    }

    /// Add a single entity table.
    ///
    /// Generates a CREATE TABLE statement for the entity, executed during `build()` after the
    /// roster tables. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), roster_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(WeaponType)
    ///     .with_table(Weapon)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Connect to a fresh in-memory database and create the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for fixtures
    /// - `Err(TestError::DbErr)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_roster_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Faction),
                schema.create_table_from_entity(entity::prelude::FighterCategory),
                schema.create_table_from_entity(entity::prelude::SkillType),
                schema.create_table_from_entity(entity::prelude::Skill),
                schema.create_table_from_entity(entity::prelude::Trait),
                schema.create_table_from_entity(entity::prelude::WeaponType),
                schema.create_table_from_entity(entity::prelude::FighterStats),
                schema.create_table_from_entity(entity::prelude::FighterType),
                schema.create_table_from_entity(entity::prelude::Weapon),
                schema.create_table_from_entity(entity::prelude::WeaponStats),
                schema.create_table_from_entity(entity::prelude::TraitOnWeaponStats),
            ]);
        }

        all_tables.extend(self.tables);

        context.with_tables(all_tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
