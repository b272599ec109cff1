//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainResult, Product, ProductRepository};
use crate::infrastructure::database::entities::product;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: product::Model) -> Product {
    Product {
        product_id: m.product_id,
        product_name: m.product_name,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(p: &Product) -> product::ActiveModel {
    product::ActiveModel {
        product_id: Set(p.product_id),
        product_name: Set(p.product_name.clone()),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    }
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn add(&self, p: Product) -> DomainResult<Product> {
        let now = Utc::now();
        let model = product::ActiveModel {
            product_name: Set(p.product_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        let result = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(product_id = result.product_id, name = %result.product_name, "Product added");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, p: Product) -> DomainResult<Option<Product>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = product::Entity::find_by_id(p.product_id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut merged = entity_to_domain(existing);
        merged.merge(&p);
        merged.updated_at = Utc::now();

        let result = domain_to_active(&merged)
            .update(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(product_id = result.product_id, "Product updated");
        Ok(Some(entity_to_domain(result)))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::ProductId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Product>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = product::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        product::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(product_id = id, "Product removed");
        Ok(Some(entity_to_domain(existing)))
    }
}
