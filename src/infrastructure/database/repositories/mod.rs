//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.
//! Writes run inside a `DatabaseTransaction` that is only committed on
//! success; an early return drops (and rolls back) the transaction.

pub mod bundle_repository;
pub mod plan_repository;
pub mod product_repository;
pub mod product_service_repository;
pub mod repository_provider;
pub mod service_repository;

#[cfg(test)]
mod tests;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Persistence(e.into())
}
