//! Bundle repository interface

use async_trait::async_trait;

use super::model::Bundle;
use crate::domain::DomainResult;

#[async_trait]
pub trait BundleRepository: Send + Sync {
    async fn add(&self, bundle: Bundle) -> DomainResult<Bundle>;
    async fn update(&self, bundle: Bundle) -> DomainResult<Option<Bundle>>;
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Bundle>>;
    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Bundle>>;
    async fn get_all(&self) -> DomainResult<Vec<Bundle>>;
    async fn remove(&self, id: i32) -> DomainResult<Option<Bundle>>;
}
