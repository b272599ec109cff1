//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    BundleRepository, PlanRepository, ProductRepository, ProductServiceRepository,
    RepositoryProvider, ServiceRepository,
};

use super::bundle_repository::SeaOrmBundleRepository;
use super::plan_repository::SeaOrmPlanRepository;
use super::product_repository::SeaOrmProductRepository;
use super::product_service_repository::SeaOrmProductServiceRepository;
use super::service_repository::SeaOrmServiceRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let plan = repos.plans().get_by_product_id(7).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    products: SeaOrmProductRepository,
    services: SeaOrmServiceRepository,
    plans: SeaOrmPlanRepository,
    bundles: SeaOrmBundleRepository,
    product_services: SeaOrmProductServiceRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: SeaOrmProductRepository::new(db.clone()),
            services: SeaOrmServiceRepository::new(db.clone()),
            plans: SeaOrmPlanRepository::new(db.clone()),
            bundles: SeaOrmBundleRepository::new(db.clone()),
            product_services: SeaOrmProductServiceRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn products(&self) -> &dyn ProductRepository {
        &self.products
    }

    fn services(&self) -> &dyn ServiceRepository {
        &self.services
    }

    fn plans(&self) -> &dyn PlanRepository {
        &self.plans
    }

    fn bundles(&self) -> &dyn BundleRepository {
        &self.bundles
    }

    fn product_services(&self) -> &dyn ProductServiceRepository {
        &self.product_services
    }
}
