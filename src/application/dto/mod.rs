//! Data carriers exchanged with callers of the catalog managers
//!
//! DTOs mirror the entity fields without the store-managed timestamps.
//! Mapping to and from entities is written out by hand per pair.

pub mod bundle;
pub mod plan;
pub mod product;
pub mod product_service;
pub mod service;

pub use bundle::BundleDto;
pub use plan::PlanDto;
pub use product::ProductDto;
pub use product_service::ProductServiceDto;
pub use service::ServiceDto;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_name_is_omitted_on_the_wire() {
        let value = serde_json::to_value(ServiceDto { service_id: 4, service_name: None }).unwrap();
        assert_eq!(value, json!({ "service_id": 4 }));
    }

    #[test]
    fn identity_defaults_to_zero_when_missing() {
        let dto: ProductDto = serde_json::from_value(json!({ "product_name": "Starter" })).unwrap();
        assert_eq!(dto, ProductDto::named("Starter"));

        let plan: PlanDto =
            serde_json::from_value(json!({ "product_id": 7, "validity_days": 30 })).unwrap();
        assert_eq!(plan, PlanDto::new(7, 30));
    }

    #[test]
    fn link_round_trips_through_the_entity() {
        let dto = ProductServiceDto {
            product_service_id: 9,
            ..ProductServiceDto::new(1, 2, 300)
        };
        let entity = crate::domain::ProductService::from(&dto);
        assert_eq!(ProductServiceDto::from(entity), dto);
    }
}
