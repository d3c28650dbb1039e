/// Domain services
///
/// One service per entity, each a thin adapter between the validated
/// request shape and the store. Services own exactly one responsibility
/// beyond pass-through: translating store sentinels into the typed
/// `ServiceError` taxonomy. Field validation stays in the handlers.
///
/// List operations issue a count and a page fetch as two independent
/// queries; under concurrent writes the total and the page can disagree.
/// That inconsistency is documented behavior, not corrected here.

pub mod employee;
pub mod hospital;
pub mod task;

pub use employee::EmployeeService;
pub use hospital::HospitalService;
pub use task::TaskService;

use taskward_shared::store::StoreError;
use thiserror::Error;

/// Typed service error taxonomy
///
/// Every store failure is classified exactly once at this boundary;
/// handlers never see raw store errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed input (client error)
    #[error("{0}")]
    BadArgument(String),

    /// Referenced entity absent
    #[error("{0}")]
    ResourceNotFound(String),

    /// Uniqueness violation
    #[error("{0}")]
    AlreadyExists(String),

    /// Cross-entity ownership mismatch
    #[error("{0}")]
    PermissionDenied(String),

    /// Unclassified store failure
    #[error("internal storage error")]
    Internal(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclassified_store_error_wraps_as_internal() {
        let err: ServiceError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, ServiceError::Internal(_)));
    }

    #[test]
    fn test_error_messages_pass_through() {
        let err = ServiceError::ResourceNotFound("no hospital with id 7".to_string());
        assert_eq!(err.to_string(), "no hospital with id 7");
    }
}
