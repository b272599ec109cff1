//! SeaORM implementation of BundleRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use super::db_err;
use crate::domain::{Bundle, BundleRepository, DomainResult};
use crate::infrastructure::database::entities::bundle;

fn entity_to_domain(m: bundle::Model) -> Bundle {
    Bundle {
        bundle_id: m.bundle_id,
        bundle_name: m.bundle_name,
        price: m.price,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(b: &Bundle) -> bundle::ActiveModel {
    bundle::ActiveModel {
        bundle_id: Set(b.bundle_id),
        bundle_name: Set(b.bundle_name.clone()),
        price: Set(b.price),
        created_at: Set(b.created_at),
        updated_at: Set(b.updated_at),
    }
}

pub struct SeaOrmBundleRepository {
    db: DatabaseConnection,
}

impl SeaOrmBundleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BundleRepository for SeaOrmBundleRepository {
    async fn add(&self, b: Bundle) -> DomainResult<Bundle> {
        let now = Utc::now();
        let model = bundle::ActiveModel {
            bundle_name: Set(b.bundle_name),
            price: Set(b.price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        let result = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(bundle_id = result.bundle_id, name = %result.bundle_name, "Bundle added");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, b: Bundle) -> DomainResult<Option<Bundle>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = bundle::Entity::find_by_id(b.bundle_id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut merged = entity_to_domain(existing);
        merged.merge(&b);
        merged.updated_at = Utc::now();

        let result = domain_to_active(&merged)
            .update(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(bundle_id = result.bundle_id, "Bundle updated");
        Ok(Some(entity_to_domain(result)))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Bundle>> {
        let model = bundle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Option<Bundle>> {
        let model = bundle::Entity::find()
            .filter(bundle::Column::BundleName.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_all(&self) -> DomainResult<Vec<Bundle>> {
        let models = bundle::Entity::find()
            .order_by_asc(bundle::Column::BundleId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Bundle>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = bundle::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        bundle::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(bundle_id = id, "Bundle removed");
        Ok(Some(entity_to_domain(existing)))
    }
}
