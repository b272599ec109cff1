//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::bundle::BundleRepository;
use super::plan::PlanRepository;
use super::product::ProductRepository;
use super::product_service::ProductServiceRepository;
use super::service::ServiceRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Managers hold one `Arc<dyn RepositoryProvider>` and request only the
/// repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let service = repos.services().get_by_name("Voice").await?;
///     let links = repos.product_services().get_all_by_service_id(3).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn products(&self) -> &dyn ProductRepository;
    fn services(&self) -> &dyn ServiceRepository;
    fn plans(&self) -> &dyn PlanRepository;
    fn bundles(&self) -> &dyn BundleRepository;
    fn product_services(&self) -> &dyn ProductServiceRepository;
}
