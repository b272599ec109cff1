//! Bundle DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Bundle;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BundleDto {
    #[serde(default)]
    pub bundle_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_name: Option<String>,
    /// Price in the smallest currency unit
    #[serde(default)]
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i32,
}

impl BundleDto {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            bundle_id: 0,
            bundle_name: Some(name.into()),
            price,
        }
    }
}

impl From<Bundle> for BundleDto {
    fn from(b: Bundle) -> Self {
        Self {
            bundle_id: b.bundle_id,
            bundle_name: Some(b.bundle_name),
            price: b.price,
        }
    }
}
