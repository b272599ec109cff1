//! Product use-cases and product/service linkage

use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::application::dto::{ProductDto, ProductServiceDto, ServiceDto};
use crate::application::dto::product::INVALID_PRODUCT_NAME;
use crate::domain::{
    DomainError, DomainResult, PersistenceError, Product, ProductService, RepositoryProvider,
};
use crate::shared::{is_positive_id, validation_message};

const INVALID_PRODUCT_ID: &str = "product id must be greater than 0";
const INVALID_LINK_ID: &str = "product service id must be greater than 0";
const INVALID_UNITS: &str = "units must be greater than 0";
const INVALID_LINK_KEY: &str = "product id and service id must be greater than 0";
const USED_BY_PLAN: &str = "The product is used by a plan ! please remove it before deleting";
const HAS_SERVICES: &str =
    "The product has one or more services ! please remove them before deleting";
const NO_PRODUCTS: &str = "There are no products";

fn not_found(product_id: i32) -> String {
    format!("The product with id {} doesn't exist", product_id)
}

fn service_missing(service_id: i32) -> String {
    format!("The service with id {} doesn't exist", service_id)
}

fn already_linked(product_id: i32, service_id: i32) -> String {
    format!("The service {} is already part of product {}", service_id, product_id)
}

fn not_linked(product_id: i32, service_id: i32) -> String {
    format!("The service {} is not part of product {}", service_id, product_id)
}

/// Checks the product name rule: present, not blank, at most 50 characters.
fn validate_product(dto: &ProductDto) -> DomainResult<&str> {
    dto.validate()
        .map_err(|e| DomainError::Validation(validation_message(&e)))?;
    match dto.product_name.as_deref() {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(DomainError::Validation(INVALID_PRODUCT_NAME.into())),
    }
}

pub struct ProductManager {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProductManager {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    // ── Products ────────────────────────────────────────────────

    pub async fn add_product(&self, dto: ProductDto) -> DomainResult<ProductDto> {
        let name = validate_product(&dto)?;

        let created = self.repos.products().add(Product::new(name)).await?;

        info!(product_id = created.product_id, product_name = %created.product_name, "Product added");
        Ok(created.into())
    }

    pub async fn update_product(&self, dto: ProductDto) -> DomainResult<ProductDto> {
        if !is_positive_id(dto.product_id) {
            return Err(DomainError::Validation(INVALID_PRODUCT_ID.into()));
        }
        let name = validate_product(&dto)?;

        let mut product = Product::new(name);
        product.product_id = dto.product_id;

        let updated = self
            .repos
            .products()
            .update(product)
            .await?
            .ok_or_else(|| DomainError::NotFound(not_found(dto.product_id)))?;

        info!(product_id = updated.product_id, product_name = %updated.product_name, "Product renamed");
        Ok(updated.into())
    }

    pub async fn remove_product(&self, id: i32) -> DomainResult<ProductDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_PRODUCT_ID.into()));
        }

        if self.repos.plans().get_by_product_id(id).await?.is_some() {
            warn!(product_id = id, "Refusing to remove product with a plan");
            return Err(DomainError::Conflict(USED_BY_PLAN.into()));
        }
        let links = self.repos.product_services().get_all_by_product_id(id).await?;
        if !links.is_empty() {
            warn!(product_id = id, links = links.len(), "Refusing to remove product with services");
            return Err(DomainError::Conflict(HAS_SERVICES.into()));
        }

        let removed = match self.repos.products().remove(id).await {
            Ok(removed) => removed,
            Err(e) if e.is_constraint_violation() => {
                return Err(DomainError::Conflict(self.in_use_message(id).await?.into()));
            }
            Err(e) => return Err(e),
        }
        .ok_or_else(|| DomainError::NotFound(not_found(id)))?;

        info!(product_id = id, "Product removed");
        Ok(removed.into())
    }

    /// Names the reference that blocked a product delete.
    async fn in_use_message(&self, id: i32) -> DomainResult<&'static str> {
        if self.repos.plans().get_by_product_id(id).await?.is_some() {
            Ok(USED_BY_PLAN)
        } else {
            Ok(HAS_SERVICES)
        }
    }

    pub async fn get_product(&self, id: i32) -> DomainResult<ProductDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_PRODUCT_ID.into()));
        }
        debug!(product_id = id, "Looking up product");

        self.repos
            .products()
            .get_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| DomainError::NotFound(not_found(id)))
    }

    pub async fn get_all_products(&self) -> DomainResult<Vec<ProductDto>> {
        let products = self.repos.products().get_all().await?;
        if products.is_empty() {
            return Err(DomainError::NotFound(NO_PRODUCTS.into()));
        }
        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    // ── Linkage ─────────────────────────────────────────────────

    pub async fn add_service_to_product(
        &self,
        dto: ProductServiceDto,
    ) -> DomainResult<ProductServiceDto> {
        dto.validate()
            .map_err(|e| DomainError::Validation(validation_message(&e)))?;

        if self.repos.products().get_by_id(dto.product_id).await?.is_none() {
            return Err(DomainError::Conflict(not_found(dto.product_id)));
        }
        if self.repos.services().get_by_id(dto.service_id).await?.is_none() {
            return Err(DomainError::Conflict(service_missing(dto.service_id)));
        }
        if self
            .repos
            .product_services()
            .get_by_product_and_service(dto.product_id, dto.service_id)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(already_linked(dto.product_id, dto.service_id)));
        }

        let created = self
            .repos
            .product_services()
            .add(ProductService::new(dto.product_id, dto.service_id, dto.units))
            .await
            .map_err(|e| match e {
                // a racing delete of either side
                DomainError::Persistence(PersistenceError::ForeignKeyViolation(_)) => {
                    DomainError::Conflict(not_found(dto.product_id))
                }
                other => other
                    .constraint_as_conflict(|| already_linked(dto.product_id, dto.service_id)),
            })?;

        info!(
            product_service_id = created.product_service_id,
            product_id = created.product_id,
            service_id = created.service_id,
            units = created.units,
            "Service linked to product"
        );
        Ok(created.into())
    }

    /// Changes the allowance of an existing link. Product and service ids in
    /// the DTO are ignored.
    pub async fn update_product_service(
        &self,
        dto: ProductServiceDto,
    ) -> DomainResult<ProductServiceDto> {
        if !is_positive_id(dto.product_service_id) {
            return Err(DomainError::Validation(INVALID_LINK_ID.into()));
        }
        if dto.units <= 0 {
            return Err(DomainError::Validation(INVALID_UNITS.into()));
        }

        let updated = self
            .repos
            .product_services()
            .update(ProductService::from(&dto))
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "The product service with id {} doesn't exist",
                    dto.product_service_id
                ))
            })?;

        info!(
            product_service_id = updated.product_service_id,
            units = updated.units,
            "Product service updated"
        );
        Ok(updated.into())
    }

    pub async fn remove_service_from_product(
        &self,
        product_id: i32,
        service_id: i32,
    ) -> DomainResult<ProductServiceDto> {
        if !is_positive_id(product_id) || !is_positive_id(service_id) {
            return Err(DomainError::Validation(INVALID_LINK_KEY.into()));
        }

        let link = self
            .repos
            .product_services()
            .get_by_product_and_service(product_id, service_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(not_linked(product_id, service_id)))?;

        let removed = self
            .repos
            .product_services()
            .remove(link.product_service_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(not_linked(product_id, service_id)))?;

        info!(product_id, service_id, "Service unlinked from product");
        Ok(removed.into())
    }

    /// Services linked to the product, ordered by service id.
    pub async fn get_all_services_of_product(
        &self,
        product_id: i32,
    ) -> DomainResult<Vec<ServiceDto>> {
        if !is_positive_id(product_id) {
            return Err(DomainError::Validation(INVALID_PRODUCT_ID.into()));
        }
        if self.repos.products().get_by_id(product_id).await?.is_none() {
            return Err(DomainError::NotFound(not_found(product_id)));
        }

        let links = self
            .repos
            .product_services()
            .get_all_by_product_id(product_id)
            .await?;
        let mut services = Vec::with_capacity(links.len());
        for link in links {
            if let Some(service) = self.repos.services().get_by_id(link.service_id).await? {
                services.push(ServiceDto::from(service));
            }
        }
        services.sort_by_key(|s| s.service_id);
        Ok(services)
    }
}
