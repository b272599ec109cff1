//! # Pricing catalog
//!
//! Products, plans, services and bundles of a telecom-style offer catalog.
//!
//! ## Architecture
//!
//! - **domain**: Entities and repository traits
//! - **application**: DTOs and the managers enforcing catalog rules
//! - **infrastructure**: SeaORM persistence, migrations and the in-memory store
//! - **shared**: Error types and input rules
//! - **app**: Bootstrap used by the CLI

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use app::{init_tracing, AppHandle, AppOptions, Catalog};
pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export database types for easy access
pub use infrastructure::{init_database, run_migrations, DatabaseConfig, InMemoryStore, SeaOrmRepositoryProvider};
