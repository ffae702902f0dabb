//! Typed error enum for the service layer.
//!
//! Unifies validation and storage failures into a single error type so the
//! HTTP layer can map each failure mode to a status code.

use voyage_core::CoreError;
use voyage_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying validation and storage failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input; rejected before any store call.
    #[error("{0}")]
    InvalidInput(String),

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: &str) -> Self {
        Self::NotFound { entity, id: id.to_owned() }
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            _ => false,
        }
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Storage(StorageError::NotFound { .. }))
    }

    /// Whether this error represents a duplicate or foreign-key conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate() || e.is_constraint())
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

/// The budget's expenses would sum past the `Decimal` range.
pub(crate) fn spent_overflow(budget_id: &str) -> ServiceError {
    ServiceError::InvalidInput(format!(
        "Expenses of budget {budget_id} exceed the largest supported amount"
    ))
}

/// Reject blank identifiers before they reach the store.
pub(crate) fn require_id(id: &str) -> Result<(), ServiceError> {
    Ok(voyage_core::require_non_empty(id, "Id is required")?)
}
