//! Bundle domain entity

use chrono::{DateTime, Utc};

/// A named, priced offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub bundle_id: i32,
    pub bundle_name: String,
    /// Price in the smallest currency unit (e.g. cents)
    pub price: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bundle {
    pub fn new(bundle_name: impl Into<String>, price: i32) -> Self {
        let now = Utc::now();
        Self {
            bundle_id: 0,
            bundle_name: bundle_name.into(),
            price,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn merge(&mut self, incoming: &Bundle) {
        self.bundle_name = incoming.bundle_name.clone();
        self.price = incoming.price;
    }

    /// Format price as human-readable string
    pub fn format_price(&self) -> String {
        format!("{}.{:02}", self.price / 100, self.price % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_price_helper() {
        assert_eq!(Bundle::new("Family", 12345).format_price(), "123.45");
        assert_eq!(Bundle::new("Free", 0).format_price(), "0.00");
    }
}
