pub use sea_orm_migration::prelude::*;

mod m20250301_000001_faction;
mod m20250301_000002_fighter_category;
mod m20250301_000003_skill_type;
mod m20250301_000004_skill;
mod m20250301_000005_trait;
mod m20250301_000006_weapon_type;
mod m20250301_000007_fighter_stats;
mod m20250301_000008_fighter_type;
mod m20250301_000009_weapon;
mod m20250301_000010_weapon_stats;
mod m20250301_000011_trait_on_weapon_stats;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_faction::Migration),
            Box::new(m20250301_000002_fighter_category::Migration),
            Box::new(m20250301_000003_skill_type::Migration),
            Box::new(m20250301_000004_skill::Migration),
            Box::new(m20250301_000005_trait::Migration),
            Box::new(m20250301_000006_weapon_type::Migration),
            Box::new(m20250301_000007_fighter_stats::Migration),
            Box::new(m20250301_000008_fighter_type::Migration),
            Box::new(m20250301_000009_weapon::Migration),
            Box::new(m20250301_000010_weapon_stats::Migration),
            Box::new(m20250301_000011_trait_on_weapon_stats::Migration),
        ]
    }
}
