//! Service aggregate
//!
//! A billable service (voice, SMS, data...) that products bundle together.

pub mod model;
pub mod repository;

pub use model::Service;
pub use repository::ServiceRepository;
