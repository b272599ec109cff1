//! Product/Service link aggregate
//!
//! Many-to-many association between products and the services they include.
//! A link keeps both ends alive: neither the product nor the service can be
//! removed while it exists.

pub mod model;
pub mod repository;

pub use model::ProductService;
pub use repository::ProductServiceRepository;
