//! Product DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Product;

pub const INVALID_PRODUCT_NAME: &str = "product name must be between 1 and 50 characters";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    #[serde(default)]
    pub product_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "product name must be between 1 and 50 characters"),
        length(min = 1, max = 50, message = "product name must be between 1 and 50 characters")
    )]
    pub product_name: Option<String>,
}

impl ProductDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            product_id: 0,
            product_name: Some(name.into()),
        }
    }

    pub fn with_id(product_id: i32, name: impl Into<String>) -> Self {
        Self {
            product_id,
            product_name: Some(name.into()),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            product_id: p.product_id,
            product_name: Some(p.product_name),
        }
    }
}
