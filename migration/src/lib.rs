pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20251018_000001_users;
mod m20251018_000002_exercises;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_users::Migration),
            Box::new(m20251018_000002_exercises::Migration),
        ]
    }
}
