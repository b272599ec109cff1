//! Database entities module

pub mod bundle;
pub mod plan;
pub mod product;
pub mod product_service;
pub mod service;

pub use bundle::Entity as Bundle;
pub use plan::Entity as Plan;
pub use product::Entity as Product;
pub use product_service::Entity as ProductService;
pub use service::Entity as Service;
