//! Migrator registering one create-table migration per resource kind.
//! The three collections are independent; order is cosmetic.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_project;
mod m20240101_000002_create_certificate;
mod m20240101_000003_create_accomplishment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_project::Migration),
            Box::new(m20240101_000002_create_certificate::Migration),
            Box::new(m20240101_000003_create_accomplishment::Migration),
        ]
    }
}
