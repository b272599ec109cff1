//! Product/Service link entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductService {
    pub product_service_id: i32,
    pub product_id: i32,
    pub service_id: i32,
    /// Service allowance included with the product (minutes, messages, MB...)
    pub units: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductService {
    pub fn new(product_id: i32, service_id: i32, units: i32) -> Self {
        let now = Utc::now();
        Self {
            product_service_id: 0,
            product_id,
            service_id,
            units,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copies the caller-mutable fields of `incoming` onto `self`.
    ///
    /// Only the allowance changes; re-pointing a link means removing it and
    /// adding a new one.
    pub fn merge(&mut self, incoming: &ProductService) {
        self.units = incoming.units;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_only_touches_units() {
        let mut stored = ProductService::new(1, 2, 100);
        stored.product_service_id = 5;

        stored.merge(&ProductService::new(9, 9, 250));

        assert_eq!(stored.product_service_id, 5);
        assert_eq!((stored.product_id, stored.service_id), (1, 2));
        assert_eq!(stored.units, 250);
    }
}
