//! Plan use-cases
//!
//! A product carries at most one plan.

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::application::dto::PlanDto;
use crate::domain::{DomainError, DomainResult, PersistenceError, Plan, RepositoryProvider};
use crate::shared::{is_positive_id, validation_message};

const INVALID_PLAN_ID: &str = "plan id must be greater than 0";
const INVALID_PRODUCT_ID: &str = "product id must be greater than 0";
const NO_PLANS: &str = "There are no plans";

fn product_missing(product_id: i32) -> String {
    format!("The product with id {} doesn't exist", product_id)
}

fn product_mapped(product_id: i32) -> String {
    format!("The product with id {} is already mapped to a plan", product_id)
}

fn not_found(plan_id: i32) -> String {
    format!("The plan with id {} doesn't exist", plan_id)
}

/// Maps a store constraint failure on a plan write to the message the
/// matching pre-check produces.
fn plan_write_conflict(err: DomainError, product_id: i32) -> DomainError {
    match err {
        DomainError::Persistence(PersistenceError::ForeignKeyViolation(_)) => {
            DomainError::Conflict(product_missing(product_id))
        }
        other => other.constraint_as_conflict(|| product_mapped(product_id)),
    }
}

pub struct PlanManager {
    repos: Arc<dyn RepositoryProvider>,
}

impl PlanManager {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn add_plan(&self, dto: PlanDto) -> DomainResult<PlanDto> {
        dto.validate()
            .map_err(|e| DomainError::Validation(validation_message(&e)))?;

        self.ensure_product_exists(dto.product_id).await?;
        if self.repos.plans().get_by_product_id(dto.product_id).await?.is_some() {
            return Err(DomainError::Conflict(product_mapped(dto.product_id)));
        }

        let created = self
            .repos
            .plans()
            .add(Plan::new(dto.product_id, dto.validity_days))
            .await
            .map_err(|e| plan_write_conflict(e, dto.product_id))?;

        info!(
            plan_id = created.plan_id,
            product_id = created.product_id,
            validity_days = created.validity_days,
            "Plan added"
        );
        Ok(created.into())
    }

    pub async fn update_plan(&self, dto: PlanDto) -> DomainResult<PlanDto> {
        if !is_positive_id(dto.plan_id) {
            return Err(DomainError::Validation(INVALID_PLAN_ID.into()));
        }
        dto.validate()
            .map_err(|e| DomainError::Validation(validation_message(&e)))?;

        if self.repos.plans().get_by_id(dto.plan_id).await?.is_none() {
            return Err(DomainError::NotFound(not_found(dto.plan_id)));
        }
        self.ensure_product_exists(dto.product_id).await?;
        if let Some(holder) = self.repos.plans().get_by_product_id(dto.product_id).await? {
            if holder.plan_id != dto.plan_id {
                return Err(DomainError::Conflict(product_mapped(dto.product_id)));
            }
        }

        let updated = self
            .repos
            .plans()
            .update(Plan::from(&dto))
            .await
            .map_err(|e| plan_write_conflict(e, dto.product_id))?
            .ok_or_else(|| DomainError::NotFound(not_found(dto.plan_id)))?;

        info!(
            plan_id = updated.plan_id,
            product_id = updated.product_id,
            validity_days = updated.validity_days,
            "Plan updated"
        );
        Ok(updated.into())
    }

    pub async fn remove_plan(&self, id: i32) -> DomainResult<PlanDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_PLAN_ID.into()));
        }

        let removed = self
            .repos
            .plans()
            .remove(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(not_found(id)))?;

        info!(plan_id = id, product_id = removed.product_id, "Plan removed");
        Ok(removed.into())
    }

    pub async fn get_plan(&self, id: i32) -> DomainResult<PlanDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_PLAN_ID.into()));
        }
        debug!(plan_id = id, "Looking up plan");

        self.repos
            .plans()
            .get_by_id(id)
            .await?
            .map(PlanDto::from)
            .ok_or_else(|| DomainError::NotFound(not_found(id)))
    }

    pub async fn get_all_plans(&self) -> DomainResult<Vec<PlanDto>> {
        let plans = self.repos.plans().get_all().await?;
        if plans.is_empty() {
            return Err(DomainError::NotFound(NO_PLANS.into()));
        }
        Ok(plans.into_iter().map(PlanDto::from).collect())
    }

    pub async fn get_plan_of_product(&self, product_id: i32) -> DomainResult<PlanDto> {
        if !is_positive_id(product_id) {
            return Err(DomainError::Validation(INVALID_PRODUCT_ID.into()));
        }
        debug!(product_id, "Looking up plan of product");

        self.repos
            .plans()
            .get_by_product_id(product_id)
            .await?
            .map(PlanDto::from)
            .ok_or_else(|| {
                DomainError::NotFound(format!("There is no plan for product {}", product_id))
            })
    }

    async fn ensure_product_exists(&self, product_id: i32) -> DomainResult<()> {
        match self.repos.products().get_by_id(product_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::Conflict(product_missing(product_id))),
        }
    }
}
