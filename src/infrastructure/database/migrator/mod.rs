//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_products;
mod m20250301_000002_create_services;
mod m20250301_000003_create_plans;
mod m20250301_000004_create_bundles;
mod m20250301_000005_create_product_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_products::Migration),
            Box::new(m20250301_000002_create_services::Migration),
            Box::new(m20250301_000003_create_plans::Migration),
            Box::new(m20250301_000004_create_bundles::Migration),
            Box::new(m20250301_000005_create_product_services::Migration),
        ]
    }
}
