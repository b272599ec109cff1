//! Plan repository interface

use async_trait::async_trait;

use super::model::Plan;
use crate::domain::DomainResult;

#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn add(&self, plan: Plan) -> DomainResult<Plan>;
    async fn update(&self, plan: Plan) -> DomainResult<Option<Plan>>;
    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Plan>>;
    async fn get_by_product_id(&self, product_id: i32) -> DomainResult<Option<Plan>>;
    async fn get_all(&self) -> DomainResult<Vec<Plan>>;
    async fn remove(&self, id: i32) -> DomainResult<Option<Plan>>;
}
