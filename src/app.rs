//! Reusable catalog runtime.
//!
//! [`AppHandle`] owns the bootstrap: database connection, migrations and
//! the managers wired over one repository provider. The CLI and the tests
//! use it instead of repeating the wiring.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::application::services::{BundleManager, PlanManager, ProductManager, ServiceManager};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::{init_database, run_migrations, DatabaseConfig, SeaOrmRepositoryProvider};

// ── Options ────────────────────────────────────────────────────────

pub struct AppOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── Catalog ────────────────────────────────────────────────────────

/// The four managers sharing one repository provider.
pub struct Catalog {
    pub services: ServiceManager,
    pub products: ProductManager,
    pub plans: PlanManager,
    pub bundles: BundleManager,
}

impl Catalog {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            services: ServiceManager::new(repos.clone()),
            products: ProductManager::new(repos.clone()),
            plans: PlanManager::new(repos.clone()),
            bundles: BundleManager::new(repos),
        }
    }
}

// ── AppHandle ──────────────────────────────────────────────────────

pub struct AppHandle {
    pub catalog: Catalog,
    /// Repository provider for direct data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the catalog was started with.
    pub config: AppConfig,

    db: DatabaseConnection,
}

impl AppHandle {
    /// Connect to the configured database, migrate it when asked to, and
    /// wire the managers.
    pub async fn start(opts: AppOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
            max_connections: app_cfg.database.max_connections,
        };
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            run_migrations(&db).await?;
        }

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let catalog = Catalog::new(repos.clone());

        info!("Pricing catalog ready");
        Ok(Self {
            catalog,
            repos,
            config: app_cfg,
            db,
        })
    }

    /// Close the database connection.
    pub async fn shutdown(self) {
        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }
}

// ── Tracing ────────────────────────────────────────────────────────

/// Install the global subscriber. `RUST_LOG` overrides `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{PlanDto, ProductDto, ProductServiceDto, ServiceDto};
    use crate::domain::DomainError;
    use crate::infrastructure::InMemoryStore;

    async fn exercise(catalog: &Catalog) {
        let sms = catalog.services.add_service(ServiceDto::named("SMS")).await.unwrap();
        let product = catalog
            .products
            .add_product(ProductDto::named("Starter"))
            .await
            .unwrap();
        catalog
            .products
            .add_service_to_product(ProductServiceDto::new(product.product_id, sms.service_id, 100))
            .await
            .unwrap();
        catalog
            .plans
            .add_plan(PlanDto::new(product.product_id, 30))
            .await
            .unwrap();

        let err = catalog.services.remove_service(sms.service_id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let err = catalog.products.remove_product(product.product_id).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let products = catalog
            .services
            .get_all_products_of_service(sms.service_id)
            .await
            .unwrap();
        assert_eq!(products, vec![product]);
    }

    #[tokio::test]
    async fn catalog_over_memory_store() {
        let catalog = Catalog::new(Arc::new(InMemoryStore::new()));
        exercise(&catalog).await;
    }

    #[tokio::test]
    async fn start_migrates_an_in_memory_database() {
        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".into();
        config.database.max_connections = Some(1);
        if std::env::var("DATABASE_URL").is_ok() {
            return;
        }

        let handle = AppHandle::start(AppOptions {
            config,
            auto_migrate: true,
        })
        .await
        .unwrap();

        exercise(&handle.catalog).await;
        handle.shutdown().await;
    }
}
