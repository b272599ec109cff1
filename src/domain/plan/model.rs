//! Plan domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub plan_id: i32,
    /// Unique: one plan per product.
    pub product_id: i32,
    pub validity_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(product_id: i32, validity_days: i32) -> Self {
        let now = Utc::now();
        Self {
            plan_id: 0,
            product_id,
            validity_days,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copies the caller-mutable fields of `incoming` onto `self`.
    ///
    /// The product may be re-pointed; the store still enforces one plan per
    /// product.
    pub fn merge(&mut self, incoming: &Plan) {
        self.product_id = incoming.product_id;
        self.validity_days = incoming.validity_days;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_copies_product_and_validity() {
        let mut stored = Plan::new(7, 30);
        stored.plan_id = 1;

        stored.merge(&Plan::new(8, 45));

        assert_eq!(stored.plan_id, 1);
        assert_eq!(stored.product_id, 8);
        assert_eq!(stored.validity_days, 45);
    }
}
