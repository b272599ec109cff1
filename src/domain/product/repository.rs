//! Product repository interface

use async_trait::async_trait;

use super::model::Product;
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn add(&self, product: Product) -> DomainResult<Product>;
    async fn update(&self, product: Product) -> DomainResult<Option<Product>>;
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Product>>;
    async fn get_all(&self) -> DomainResult<Vec<Product>>;
    async fn remove(&self, id: i32) -> DomainResult<Option<Product>>;
}
