//! SeaORM implementation of ProductServiceRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainResult, ProductService, ProductServiceRepository};
use crate::infrastructure::database::entities::product_service;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: product_service::Model) -> ProductService {
    ProductService {
        product_service_id: m.product_service_id,
        product_id: m.product_id,
        service_id: m.service_id,
        units: m.units,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(l: &ProductService) -> product_service::ActiveModel {
    product_service::ActiveModel {
        product_service_id: Set(l.product_service_id),
        product_id: Set(l.product_id),
        service_id: Set(l.service_id),
        units: Set(l.units),
        created_at: Set(l.created_at),
        updated_at: Set(l.updated_at),
    }
}

// ── SeaOrmProductServiceRepository ──────────────────────────────

pub struct SeaOrmProductServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductServiceRepository for SeaOrmProductServiceRepository {
    async fn add(&self, l: ProductService) -> DomainResult<ProductService> {
        let now = Utc::now();
        let model = product_service::ActiveModel {
            product_id: Set(l.product_id),
            service_id: Set(l.service_id),
            units: Set(l.units),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        let result = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(
            product_service_id = result.product_service_id,
            product_id = result.product_id,
            service_id = result.service_id,
            "Service linked to product"
        );
        Ok(entity_to_domain(result))
    }

    async fn update(&self, l: ProductService) -> DomainResult<Option<ProductService>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = product_service::Entity::find_by_id(l.product_service_id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut merged = entity_to_domain(existing);
        merged.merge(&l);
        merged.updated_at = Utc::now();

        let result = domain_to_active(&merged)
            .update(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(
            product_service_id = result.product_service_id,
            units = result.units,
            "Product service updated"
        );
        Ok(Some(entity_to_domain(result)))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<ProductService>> {
        let model = product_service::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_by_product_and_service(
        &self,
        product_id: i32,
        service_id: i32,
    ) -> DomainResult<Option<ProductService>> {
        let model = product_service::Entity::find()
            .filter(product_service::Column::ProductId.eq(product_id))
            .filter(product_service::Column::ServiceId.eq(service_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_all_by_product_id(&self, product_id: i32) -> DomainResult<Vec<ProductService>> {
        let models = product_service::Entity::find()
            .filter(product_service::Column::ProductId.eq(product_id))
            .order_by_asc(product_service::Column::ProductServiceId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn get_all_by_service_id(&self, service_id: i32) -> DomainResult<Vec<ProductService>> {
        let models = product_service::Entity::find()
            .filter(product_service::Column::ServiceId.eq(service_id))
            .order_by_asc(product_service::Column::ProductServiceId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn get_all(&self) -> DomainResult<Vec<ProductService>> {
        let models = product_service::Entity::find()
            .order_by_asc(product_service::Column::ProductServiceId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<ProductService>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = product_service::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        product_service::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(product_service_id = id, "Service unlinked from product");
        Ok(Some(entity_to_domain(existing)))
    }
}
