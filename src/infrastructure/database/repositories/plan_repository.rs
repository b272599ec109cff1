//! SeaORM implementation of PlanRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

use super::db_err;
use crate::domain::{DomainResult, Plan, PlanRepository};
use crate::infrastructure::database::entities::plan;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: plan::Model) -> Plan {
    Plan {
        plan_id: m.plan_id,
        product_id: m.product_id,
        validity_days: m.validity_days,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(p: &Plan) -> plan::ActiveModel {
    plan::ActiveModel {
        plan_id: Set(p.plan_id),
        product_id: Set(p.product_id),
        validity_days: Set(p.validity_days),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    }
}

// ── SeaOrmPlanRepository ────────────────────────────────────────

pub struct SeaOrmPlanRepository {
    db: DatabaseConnection,
}

impl SeaOrmPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlanRepository for SeaOrmPlanRepository {
    async fn add(&self, p: Plan) -> DomainResult<Plan> {
        let now = Utc::now();
        let model = plan::ActiveModel {
            product_id: Set(p.product_id),
            validity_days: Set(p.validity_days),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        let result = model.insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(
            plan_id = result.plan_id,
            product_id = result.product_id,
            validity_days = result.validity_days,
            "Plan added"
        );
        Ok(entity_to_domain(result))
    }

    async fn update(&self, p: Plan) -> DomainResult<Option<Plan>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = plan::Entity::find_by_id(p.plan_id)
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

        debug!(plan_id = result.plan_id, "Plan updated");
        Ok(Some(entity_to_domain(result)))
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<Option<Plan>> {
        let model = plan::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_by_product_id(&self, product_id: i32) -> DomainResult<Option<Plan>> {
        let model = plan::Entity::find()
            .filter(plan::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn get_all(&self) -> DomainResult<Vec<Plan>> {
        let models = plan::Entity::find()
            .order_by_asc(plan::Column::PlanId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn remove(&self, id: i32) -> DomainResult<Option<Plan>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let existing = plan::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        plan::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        debug!(plan_id = id, "Plan removed");
        Ok(Some(entity_to_domain(existing)))
    }
}
