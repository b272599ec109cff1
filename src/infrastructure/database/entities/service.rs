//! Service entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_id: i32,

    /// Unique, at most 25 characters
    #[sea_orm(unique)]
    pub service_name: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_service::Entity")]
    ProductServices,
}

impl Related<super::product_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductServices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
