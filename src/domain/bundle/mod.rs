//! Bundle aggregate

pub mod model;
pub mod repository;

pub use model::Bundle;
pub use repository::BundleRepository;
