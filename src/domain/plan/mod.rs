//! Plan aggregate
//!
//! Each product has at most one plan, which fixes its validity period.

pub mod model;
pub mod repository;

pub use model::Plan;
pub use repository::PlanRepository;
