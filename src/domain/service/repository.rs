//! Service repository interface

use async_trait::async_trait;

use super::model::Service;
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn add(&self, service: Service) -> DomainResult<Service>;
    async fn update(&self, service: Service) -> DomainResult<Option<Service>>;
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Service>>;
    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Service>>;
    async fn get_all(&self) -> DomainResult<Vec<Service>>;
    async fn remove(&self, id: i32) -> DomainResult<Option<Service>>;
}
