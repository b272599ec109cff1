//! Catalog domain: entities and repository interfaces

pub mod bundle;
pub mod plan;
pub mod product;
pub mod product_service;
pub mod repositories;
pub mod service;

pub use bundle::{Bundle, BundleRepository};
pub use plan::{Plan, PlanRepository};
pub use product::{Product, ProductRepository};
pub use product_service::{ProductService, ProductServiceRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use service::{Service, ServiceRepository};

pub use crate::shared::errors::{DomainError, PersistenceError};
