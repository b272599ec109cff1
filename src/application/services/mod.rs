//! Application services

mod bundle_manager;
mod plan_manager;
mod product_manager;
mod service_manager;

pub use bundle_manager::BundleManager;
pub use plan_manager::PlanManager;
pub use product_manager::ProductManager;
pub use service_manager::ServiceManager;
