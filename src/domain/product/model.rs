//! Product domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Assigned by the store on insert, 0 before that.
    pub product_id: i32,
    pub product_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(product_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            product_id: 0,
            product_name: product_name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Copies the caller-mutable fields of `incoming` onto `self`.
    pub fn merge(&mut self, incoming: &Product) {
        self.product_name = incoming.product_name.clone();
    }
}
