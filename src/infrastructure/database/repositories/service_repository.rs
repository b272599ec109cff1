//! SeaORM implementation of ServiceRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainResult, Service, ServiceRepository};
use crate::infrastructure::database::entities::service;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: service::Model) -> Service {
    Service {
        service_id: m.service_id,
        service_name: m.service_name,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(s: &Service) -> service::ActiveModel {
    service::ActiveModel {
        service_id: Set(s.service_id),
        service_name: Set(s.service_name.clone()),
        created_at: Set(s.created_at),
        updated_at: Set(s.updated_at),
    }
}

// ── SeaOrmServiceRepository ─────────────────────────────────────

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn add(&self, s: Service) -> DomainResult<Service> {
        let now = Utc::now();
        let model = service::ActiveModel {
            service_name: Set(s.service_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        let result = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(service_id = result.service_id, name = %result.service_name, "Service added");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, s: Service) -> DomainResult<Option<Service>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = service::Entity::find_by_id(s.service_id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut merged = entity_to_domain(existing);
        merged.merge(&s);
        merged.updated_at = Utc::now();

        let result = domain_to_active(&merged)
            .update(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(service_id = result.service_id, name = %result.service_name, "Service updated");
        Ok(Some(entity_to_domain(result)))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Service>> {
        let model = service::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Service>> {
        let model = service::Entity::find()
            .filter(service::Column::ServiceName.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_all(&self) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .order_by_asc(service::Column::ServiceId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Service>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = service::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        service::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(service_id = id, "Service removed");
        Ok(Some(entity_to_domain(existing)))
    }
}
