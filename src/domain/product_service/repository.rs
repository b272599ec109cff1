//! Product/Service link repository interface

use async_trait::async_trait;

use super::model::ProductService;
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductServiceRepository: Send + Sync {
    async fn add(&self, link: ProductService) -> DomainResult<ProductService>;
    async fn update(&self, link: ProductService) -> DomainResult<Option<ProductService>>;
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<ProductService>>;
    async fn get_by_product_and_service(
        &self,
        product_id: i32,
        service_id: i32,
    ) -> DomainResult<Option<ProductService>>;
    async fn get_all_by_product_id(&self, product_id: i32) -> DomainResult<Vec<ProductService>>;
    async fn get_all_by_service_id(&self, service_id: i32) -> DomainResult<Vec<ProductService>>;
    async fn get_all(&self) -> DomainResult<Vec<ProductService>>;
    async fn remove(&self, id: i32) -> DomainResult<Option<ProductService>>;
}
