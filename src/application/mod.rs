pub mod dto;
pub mod services;

// Re-export key types for convenience
pub use dto::{BundleDto, PlanDto, ProductDto, ProductServiceDto, ServiceDto};
pub use services::{BundleManager, PlanManager, ProductManager, ServiceManager};
