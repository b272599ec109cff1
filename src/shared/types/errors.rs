use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl DomainError {
    /// Whether the store rejected a write because of a unique or
    /// foreign-key constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DomainError::Persistence(
                PersistenceError::UniqueViolation(_) | PersistenceError::ForeignKeyViolation(_)
            )
        )
    }

    /// Re-wraps a store constraint violation as a `Conflict` with the given
    /// message. Every other error is returned unchanged.
    pub fn constraint_as_conflict(self, message: impl FnOnce() -> String) -> DomainError {
        if self.is_constraint_violation() {
            DomainError::Conflict(message())
        } else {
            self
        }
    }
}

/// Failures raised by a repository implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for PersistenceError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => Self::UniqueViolation(msg),
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(msg)) => {
                Self::ForeignKeyViolation(msg)
            }
            _ => classify_message(err.to_string()),
        }
    }
}

/// SQLite reports `ON DELETE RESTRICT` with extended code 1811, which
/// `sql_err()` does not map, so fall back to the driver message.
fn classify_message(msg: String) -> PersistenceError {
    if msg.contains("FOREIGN KEY constraint failed") {
        PersistenceError::ForeignKeyViolation(msg)
    } else if msg.contains("UNIQUE constraint failed") {
        PersistenceError::UniqueViolation(msg)
    } else {
        PersistenceError::Database(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violations_become_conflicts() {
        let err = DomainError::from(PersistenceError::UniqueViolation("services.service_name".into()));
        let err = err.constraint_as_conflict(|| "The service with name Voice already exists".into());
        assert!(matches!(err, DomainError::Conflict(ref m) if m == "The service with name Voice already exists"));
    }

    #[test]
    fn database_errors_pass_through() {
        let err = DomainError::from(PersistenceError::Database("disk I/O error".into()));
        let err = err.constraint_as_conflict(|| unreachable!());
        assert!(matches!(err, DomainError::Persistence(PersistenceError::Database(_))));
    }

    #[test]
    fn restrict_failures_are_foreign_key_violations() {
        let err = sea_orm::DbErr::Exec(sea_orm::RuntimeErr::Internal(
            "error returned from database: (code: 1811) FOREIGN KEY constraint failed".into(),
        ));
        let err = DomainError::from(PersistenceError::from(err));

        assert!(matches!(
            err,
            DomainError::Persistence(PersistenceError::ForeignKeyViolation(_))
        ));
        let err = err.constraint_as_conflict(|| "in use".into());
        assert!(matches!(err, DomainError::Conflict(ref m) if m == "in use"));
    }

    #[test]
    fn unrelated_driver_errors_stay_database_errors() {
        let err = sea_orm::DbErr::Exec(sea_orm::RuntimeErr::Internal("database is locked".into()));
        assert!(matches!(PersistenceError::from(err), PersistenceError::Database(_)));
    }

    #[test]
    fn domain_messages_are_displayed_verbatim() {
        let err = DomainError::NotFound("There are no services".into());
        assert_eq!(err.to_string(), "There are no services");
    }
}
