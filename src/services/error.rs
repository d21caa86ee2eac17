//! Error types for service-layer operations.

use crate::db::repository::RepositoryError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error type for service operations.
///
/// Zero selections is not an error anywhere in the core: the aggregator
/// reports that state as an empty window list.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// An event, schedule, or participant the caller named does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Timepoints of the wrong kind for the event's category.
    #[error("Timepoint format mismatch: {0}")]
    FormatMismatch(String),

    /// Any other storage-layer failure, surfaced in full.
    #[error("Storage error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(what) => ServiceError::NotFound(what),
            other => ServiceError::Repository(other),
        }
    }
}
