//! Service catalog use-cases
//!
//! Validates incoming DTOs, enforces name uniqueness and refuses to delete a
//! service still linked to a product.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{ProductDto, ServiceDto};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, Service};
use crate::shared::{is_positive_id, is_valid_catalog_name};

const MISSING_NAME: &str = "Please Provide a service Name";
const INVALID_NAME: &str = "The service Name Must contain only numbers,letters and spaces and must be within 2 and 25 characters";
const INVALID_UPDATE: &str = "the service id must be greater than 0 and name must contain only spaces and numbers and be within 25 characters";
const INVALID_REMOVE_ID: &str = "Service Id must be greater than 0";
const INVALID_GET_ID: &str = "The service id must be greater than 0";
const INVALID_LOOKUP_ID: &str = "service Id must be greater than 0";
const SERVICE_IN_USE: &str =
    "The service is used By one or more products ! please remove them before deleting";
const NO_SERVICES: &str = "There are no services";

fn duplicate_name(name: &str) -> String {
    format!("The service with name {} already exists", name)
}

fn not_found(id: i32) -> String {
    format!("The service with id {} doesn't exist", id)
}

pub struct ServiceManager {
    repos: Arc<dyn RepositoryProvider>,
}

impl ServiceManager {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn add_service(&self, dto: ServiceDto) -> DomainResult<ServiceDto> {
        let Some(name) = dto.service_name.as_deref() else {
            return Err(DomainError::Conflict(MISSING_NAME.into()));
        };
        if !is_valid_catalog_name(name) {
            return Err(DomainError::Conflict(INVALID_NAME.into()));
        }
        if self.repos.services().get_by_name(name).await?.is_some() {
            return Err(DomainError::Conflict(duplicate_name(name)));
        }

        let created = self
            .repos
            .services()
            .add(Service::new(name))
            .await
            .map_err(|e| e.constraint_as_conflict(|| duplicate_name(name)))?;

        info!(service_id = created.service_id, service_name = %created.service_name, "Service added");
        Ok(created.into())
    }

    pub async fn update_service(&self, dto: ServiceDto) -> DomainResult<ServiceDto> {
        let name = match dto.service_name.as_deref() {
            Some(name) if is_positive_id(dto.service_id) && is_valid_catalog_name(name) => name,
            _ => return Err(DomainError::Validation(INVALID_UPDATE.into())),
        };

        if self.repos.services().get_by_id(dto.service_id).await?.is_none() {
            return Err(DomainError::NotFound(not_found(dto.service_id)));
        }
        if let Some(holder) = self.repos.services().get_by_name(name).await? {
            if holder.service_id != dto.service_id {
                return Err(DomainError::Conflict(duplicate_name(name)));
            }
        }

        let mut service = Service::new(name);
        service.service_id = dto.service_id;

        let updated = self
            .repos
            .services()
            .update(service)
            .await
            .map_err(|e| e.constraint_as_conflict(|| duplicate_name(name)))?
            .ok_or_else(|| DomainError::NotFound(not_found(dto.service_id)))?;

        info!(service_id = updated.service_id, service_name = %updated.service_name, "Service renamed");
        Ok(updated.into())
    }

    pub async fn remove_service(&self, id: i32) -> DomainResult<ServiceDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_REMOVE_ID.into()));
        }

        let links = self.repos.product_services().get_all_by_service_id(id).await?;
        if !links.is_empty() {
            warn!(service_id = id, links = links.len(), "Refusing to remove linked service");
            return Err(DomainError::Conflict(SERVICE_IN_USE.into()));
        }

        let removed = self
            .repos
            .services()
            .remove(id)
            .await
            .map_err(|e| e.constraint_as_conflict(|| SERVICE_IN_USE.into()))?
            .ok_or_else(|| DomainError::NotFound(not_found(id)))?;

        info!(service_id = id, "Service removed");
        Ok(removed.into())
    }

    pub async fn get_service(&self, id: i32) -> DomainResult<ServiceDto> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_GET_ID.into()));
        }
        debug!(service_id = id, "Looking up service");

        self.repos
            .services()
            .get_by_id(id)
            .await?
            .map(ServiceDto::from)
            .ok_or_else(|| DomainError::NotFound(not_found(id)))
    }

    pub async fn get_all_services(&self) -> DomainResult<Vec<ServiceDto>> {
        let services = self.repos.services().get_all().await?;
        if services.is_empty() {
            return Err(DomainError::NotFound(NO_SERVICES.into()));
        }
        Ok(services.into_iter().map(ServiceDto::from).collect())
    }

    pub async fn get_service_by_name(&self, name: &str) -> DomainResult<ServiceDto> {
        debug!(service_name = name, "Looking up service by name");

        self.repos
            .services()
            .get_by_name(name)
            .await?
            .map(ServiceDto::from)
            .ok_or_else(|| {
                DomainError::NotFound(format!("Service With Name {} doesn't exist", name))
            })
    }

    /// Products linked to the service, ordered by product id.
    pub async fn get_all_products_of_service(&self, id: i32) -> DomainResult<Vec<ProductDto>> {
        if !is_positive_id(id) {
            return Err(DomainError::Validation(INVALID_LOOKUP_ID.into()));
        }
        if self.repos.services().get_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound(not_found(id)));
        }

        let links = self.repos.product_services().get_all_by_service_id(id).await?;
        let mut products = Vec::with_capacity(links.len());
        for link in links {
            if let Some(product) = self.repos.products().get_by_id(link.product_id).await? {
                products.push(ProductDto::from(product));
            }
        }
        products.sort_by_key(|p| p.product_id);
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductService};
    use crate::infrastructure::InMemoryStore;

    fn setup() -> (Arc<InMemoryStore>, ServiceManager) {
        let store = Arc::new(InMemoryStore::new());
        let manager = ServiceManager::new(store.clone());
        (store, manager)
    }

    fn conflict_message(err: DomainError) -> String {
        match err {
            DomainError::Conflict(msg) => msg,
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn valid_names_are_stored() {
        let (_, manager) = setup();

        for name in ["Voice", "SMS 500", "ab", "Abcdefghijklmnopqrstuvwxy"] {
            let created = manager.add_service(ServiceDto::named(name)).await.unwrap();
            assert!(created.service_id > 0);

            let fetched = manager.get_service(created.service_id).await.unwrap();
            assert_eq!(fetched.service_name.as_deref(), Some(name));
        }
    }

    #[tokio::test]
    async fn invalid_names_leave_the_store_untouched() {
        let (store, manager) = setup();

        for name in [
            "OIT&(&($@&(@$($@",
            "MDUY**63974((*(Y^#",
            "e",
            "Ajhsjahfdjhsdjhkshdkfhdslsasdasdgsg",
        ] {
            let err = manager.add_service(ServiceDto::named(name)).await.unwrap_err();
            assert_eq!(conflict_message(err), INVALID_NAME);
        }

        assert_eq!(store.call_count(), 0);
        assert!(store.services().get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_name_is_a_conflict() {
        let (_, manager) = setup();

        let err = manager.add_service(ServiceDto::default()).await.unwrap_err();

        assert_eq!(conflict_message(err), MISSING_NAME);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let (store, manager) = setup();
        manager.add_service(ServiceDto::named("Voice")).await.unwrap();

        let err = manager.add_service(ServiceDto::named("Voice")).await.unwrap_err();
        assert_eq!(conflict_message(err), "The service with name Voice already exists");
        assert_eq!(store.services().get_all().await.unwrap().len(), 1);

        manager.add_service(ServiceDto::named("voice")).await.unwrap();
        assert_eq!(store.services().get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rename_keeps_the_id() {
        let (_, manager) = setup();
        let created = manager.add_service(ServiceDto::named("Voice")).await.unwrap();

        let renamed = manager
            .update_service(ServiceDto::with_id(created.service_id, "Voice Calls"))
            .await
            .unwrap();

        assert_eq!(renamed.service_id, created.service_id);
        assert_eq!(renamed.service_name.as_deref(), Some("Voice Calls"));
    }

    #[tokio::test]
    async fn update_rejects_bad_input_and_missing_rows() {
        let (store, manager) = setup();

        for dto in [
            ServiceDto::with_id(0, "Voice"),
            ServiceDto::with_id(3, "bad&name"),
            ServiceDto { service_id: 3, service_name: None },
        ] {
            let err = manager.update_service(dto).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref m) if m == INVALID_UPDATE));
        }
        assert_eq!(store.call_count(), 0);

        let err = manager
            .update_service(ServiceDto::with_id(9, "Voice"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == "The service with id 9 doesn't exist"));
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found_even_when_name_is_taken() {
        let (store, manager) = setup();
        manager.add_service(ServiceDto::named("Voice")).await.unwrap();

        let err = manager
            .update_service(ServiceDto::with_id(99, "Voice"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(ref m) if m == "The service with id 99 doesn't exist"));
        assert_eq!(store.services().get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_cannot_steal_another_name() {
        let (_, manager) = setup();
        manager.add_service(ServiceDto::named("Voice")).await.unwrap();
        let sms = manager.add_service(ServiceDto::named("SMS")).await.unwrap();

        let err = manager
            .update_service(ServiceDto::with_id(sms.service_id, "Voice"))
            .await
            .unwrap_err();

        assert_eq!(conflict_message(err), "The service with name Voice already exists");
    }

    #[tokio::test]
    async fn remove_with_invalid_id_never_reaches_the_store() {
        let (store, manager) = setup();

        for id in [0, -1] {
            let err = manager.remove_service(id).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(ref m) if m == INVALID_REMOVE_ID));
        }

        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn remove_linked_service_is_refused() {
        let (store, manager) = setup();
        let service = manager.add_service(ServiceDto::named("Data")).await.unwrap();
        let product = store.products().add(Product::new("Starter")).await.unwrap();
        store
            .product_services()
            .add(ProductService::new(product.product_id, service.service_id, 1024))
            .await
            .unwrap();

        let err = manager.remove_service(service.service_id).await.unwrap_err();

        assert_eq!(conflict_message(err), SERVICE_IN_USE);
        assert!(store
            .services()
            .get_by_id(service.service_id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn remove_returns_the_deleted_service() {
        let (_, manager) = setup();
        let created = manager.add_service(ServiceDto::named("Voice")).await.unwrap();

        let removed = manager.remove_service(created.service_id).await.unwrap();
        assert_eq!(removed, created);

        let err = manager.remove_service(created.service_id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_all_on_empty_store_is_not_found() {
        let (_, manager) = setup();

        let err = manager.get_all_services().await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == NO_SERVICES));

        manager.add_service(ServiceDto::named("Voice")).await.unwrap();
        assert_eq!(manager.get_all_services().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lookups_report_their_own_messages() {
        let (_, manager) = setup();

        let err = manager.get_service(0).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == INVALID_GET_ID));

        let err = manager.get_service_by_name("Fax").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == "Service With Name Fax doesn't exist"));

        let err = manager.get_all_products_of_service(-4).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == INVALID_LOOKUP_ID));

        let err = manager.get_all_products_of_service(4).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(ref m) if m == "The service with id 4 doesn't exist"));
    }

    #[tokio::test]
    async fn products_of_service_are_ordered_by_id() {
        let (store, manager) = setup();
        let sms = manager.add_service(ServiceDto::named("SMS")).await.unwrap();
        let starter = store.products().add(Product::new("Starter")).await.unwrap();
        let premium = store.products().add(Product::new("Premium")).await.unwrap();

        assert!(manager
            .get_all_products_of_service(sms.service_id)
            .await
            .unwrap()
            .is_empty());

        for product in [&premium, &starter] {
            store
                .product_services()
                .add(ProductService::new(product.product_id, sms.service_id, 100))
                .await
                .unwrap();
        }

        let names: Vec<_> = manager
            .get_all_products_of_service(sms.service_id)
            .await
            .unwrap()
            .into_iter()
            .filter_map(|p| p.product_name)
            .collect();
        assert_eq!(names, vec!["Starter", "Premium"]);
    }
}
