//! Bundle use-cases

use std::sync::Arc;

use tracing::{debug, info};
use validator::Validate;

use crate::application::dto::BundleDto;
use crate::domain::{Bundle, DomainError, DomainResult, RepositoryProvider};
use crate::shared::{is_positive_id, is_valid_catalog_name, validation_message};

const MISSING_NAME: &str = "Please Provide a bundle Name";
const INVALID_NAME: &str = "The bundle Name Must contain only numbers,letters and spaces and must be within 2 and 25 characters";
const INVALID_UPDATE: &str = "the bundle id must be greater than 0 and name must contain only letters, numbers and spaces and be within 2 and 25 characters";
const INVALID_ID: &str = "bundle id must be greater than 0";
const NO_BUNDLES: &str = "There are no bundles";

fn duplicate_name(name: &str) -> String {
    format!("The bundle with name {} already exists", name)
}

fn not_found(id: i32) -> String {
    format!("The bundle with id {} doesn't exist", id)
}

pub struct BundleManager {
    repos: Arc<dyn RepositoryProvider>,
}

impl BundleManager {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn add_bundle(&self, dto: BundleDto) -> DomainResult<BundleDto> {
        let Some(name) = dto.bundle_name.as_deref() else {
            return Err(DomainError::Conflict(MISSING_NAME.into()));
        };
        if !is_valid_catalog_name(name) {
            return Err(DomainError::Conflict(INVALID_NAME.into()));
        }
        dto.validate()
            .map_err(|e| DomainError::Validation(validation_message(&e)))?;
        if self.repos.bundles().get_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict(duplicate_name(name)));
        }

        let created = self
            .repos
            .bundles()
            .add(Bundle::new(name, dto.price))
            .await
            .map_err(|e| e.constraint_as_conflict(|| duplicate_name(name)))?;

        info!(
            bundle_id = created.bundle_id,
            bundle_name = %created.bundle_name,
            price = %created.format_price(),
            "Bundle added"
        );
        Ok(created.into())
    }

    pub async fn update_bundle(&self, dto: BundleDto) -> DomainResult<BundleDto> {
        let name = match dto.bundle_name.as_deref() {
            Some(name) if is_positive_id(dto.bundle_id) && is_valid_catalog_name(name) => name,
            _ => return Err(DomainError::Validation(INVALID_UPDATE.into())),
        };
        dto.validate()
            .map_err(|e| DomainError::Validation(validation_message(&e)))?;

        if self.repos.bundles().get_by_id(dto.bundle_id).await?.is_none() {
            return Err(DomainError::NotFound(not_found(dto.bundle_id)));
        }
        if let Some(holder) = self.repos.bundles().get_by_name(name).await? {
            if holder.bundle_id != dto.bundle_id {
                return Err(DomainError::Conflict(duplicate_name(name)));
            }
        }

        let mut bundle = Bundle::new(name, dto.price);
        bundle.bundle_id = dto.bundle_id;

        let updated = self
            .repos
            .bundles()
            .update(bundle)
            .await
            .map_err(|e| e.constraint_as_conflict(|| duplicate_name(name)))?
            .ok_or_else(|| DomainError::NotFound(not_found(dto.bundle_id)))?;

        info!(
            bundle_id = updated.bundle_id,
            bundle_name = %updated.bundle_name,
            price = %updated.format_price(),
            "Bundle updated"
        );
        Ok(updated.into())
    }

    pub async fn remove_bundle(&self, id: i32) -> DomainResult<BundleDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_ID.into()));
        }

        let removed = self
            .repos
            .bundles()
            .remove(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(not_found(id)))?;

        info!(bundle_id = id, "Bundle removed");
        Ok(removed.into())
    }

    pub async fn get_bundle(&self, id: i32) -> DomainResult<BundleDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_ID.into()));
        }
        debug!(bundle_id = id, "Looking up bundle");

        self.repos
            .bundles()
            .get_by_id(id)
            .await?
            .map(BundleDto::from)
            .ok_or_else(|| DomainError::NotFound(not_found(id)))
    }

    pub async fn get_bundle_by_name(&self, name: &str) -> DomainResult<BundleDto> {
        self.repos
            .bundles()
            .get_by_name(name)
            .await?
            .map(BundleDto::from)
            .ok_or_else(|| DomainError::NotFound(format!("Bundle With Name {} doesn't exist", name)))
    }

    pub async fn get_all_bundles(&self) -> DomainResult<Vec<BundleDto>> {
        let bundles = self.repos.bundles().get_all().await?;
        if bundles.is_empty() {
            return Err(DomainError::NotFound(NO_BUNDLES.into()));
        }
        Ok(bundles.into_iter().map(BundleDto::from).collect())
    }
}
