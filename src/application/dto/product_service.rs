//! Product/Service link DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::ProductService;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductServiceDto {
    #[serde(default)]
    pub product_service_id: i32,
    #[validate(range(min = 1, message = "product id must be greater than 0"))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "service id must be greater than 0"))]
    pub service_id: i32,
    #[validate(range(min = 1, message = "units must be greater than 0"))]
    pub units: i32,
}

impl ProductServiceDto {
    pub fn new(product_id: i32, service_id: i32, units: i32) -> Self {
        Self {
            product_service_id: 0,
            product_id,
            service_id,
            units,
        }
    }
}

impl From<ProductService> for ProductServiceDto {
    fn from(l: ProductService) -> Self {
        Self {
            product_service_id: l.product_service_id,
            product_id: l.product_id,
            service_id: l.service_id,
            units: l.units,
        }
    }
}

impl From<&ProductServiceDto> for ProductService {
    fn from(dto: &ProductServiceDto) -> Self {
        let mut link = ProductService::new(dto.product_id, dto.service_id, dto.units);
        link.product_service_id = dto.product_service_id;
        link
    }
}
