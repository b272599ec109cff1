//! Product aggregate
//!
//! A sellable product. Plans and service links point at it.

pub mod model;
pub mod repository;

pub use model::Product;
pub use repository::ProductRepository;
