//! Errors surfaced by the [`Store`](crate::store::Store) boundary.
//!
//! Callers never see a raw `sqlx::Error`. Driver failures are classified and
//! flattened to a message here.

use lightbnb_core::error::CoreError;
use lightbnb_core::types::DbId;

/// PostgreSQL `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL `foreign_key_violation`.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";
/// PostgreSQL `check_violation`.
const PG_CHECK_VIOLATION: &str = "23514";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Input rejected before (or by) the database; the caller's fault.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A unique constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Connectivity, timeout, or any other driver-level failure.
    #[error("Database error: {0}")]
    Database(String),
}

/// Convenience type alias for store return values.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, id } => StoreError::NotFound { entity, id },
            CoreError::Validation(msg) => StoreError::InvalidArgument(msg),
        }
    }
}

impl StoreError {
    /// Classify a driver error and log it against the failing operation.
    ///
    /// Constraint violations are caller mistakes and log at `warn`; the rest
    /// log at `error`.
    pub fn from_sqlx(operation: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            let classified = match db_err.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => Some(StoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ))),
                Some(PG_FOREIGN_KEY_VIOLATION) => Some(StoreError::InvalidArgument(format!(
                    "Referenced row does not exist: {constraint}"
                ))),
                Some(PG_CHECK_VIOLATION) => Some(StoreError::InvalidArgument(format!(
                    "Value violates check constraint: {constraint}"
                ))),
                _ => None,
            };
            if let Some(classified) = classified {
                tracing::warn!(operation, error = %db_err, "Constraint violation");
                return classified;
            }
        }

        tracing::error!(operation, error = %err, "Database error");
        StoreError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn validation_maps_to_invalid_argument() {
        let err = StoreError::from(CoreError::Validation("limit must be at least 1".into()));
        assert_matches!(err, StoreError::InvalidArgument(msg) if msg.contains("limit"));
    }

    #[test]
    fn not_found_keeps_entity_and_id() {
        let err = StoreError::from(CoreError::NotFound {
            entity: "reservation",
            id: 42,
        });
        assert_eq!(err.to_string(), "Not found: reservation with id 42");
    }

    #[test]
    fn driver_errors_become_database_errors() {
        let err = StoreError::from_sqlx("search_properties", sqlx::Error::PoolClosed);
        assert_matches!(err, StoreError::Database(_));
    }

    #[test]
    fn row_not_found_is_a_database_error() {
        let err = StoreError::from_sqlx("add_user", sqlx::Error::RowNotFound);
        assert_matches!(err, StoreError::Database(msg) if msg.contains("no rows"));
    }
}
