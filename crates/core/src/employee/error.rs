use thiserror::Error;

use crate::cache::CacheError;
use crate::storage::RepositoryError;

/// Errors surfaced by employee operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    /// Malformed client input (id, date, body).
    #[error("{0}")]
    Validation(String),
    #[error("Employee {id} not found")]
    NotFound { id: i64 },
    /// The durable store failed. Always surfaced.
    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),
    /// The cache failed on the read path.
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl EmployeeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Maps a repository error for a known id, turning the repository's
    /// not-found signal into [`EmployeeError::NotFound`].
    pub fn from_repository(err: RepositoryError, id: i64) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound { id },
            other => Self::Store(other),
        }
    }
}

/// Result type for employee operations.
pub type Result<T> = std::result::Result<T, EmployeeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_message() {
        let error = EmployeeError::validation("Invalid date format");
        assert_eq!(error.to_string(), "Invalid date format");
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            EmployeeError::NotFound { id: 42 }.to_string(),
            "Employee 42 not found"
        );
    }

    #[test]
    fn test_from_repository_maps_not_found() {
        let err = RepositoryError::NotFound {
            entity_type: "Employee",
            id: "42".to_string(),
        };
        assert_eq!(
            EmployeeError::from_repository(err, 42),
            EmployeeError::NotFound { id: 42 }
        );
    }

    #[test]
    fn test_from_repository_keeps_other_failures() {
        let err = RepositoryError::QueryFailed("disk I/O error".to_string());
        assert_eq!(
            EmployeeError::from_repository(err.clone(), 1),
            EmployeeError::Store(err)
        );
    }

    #[test]
    fn test_cache_error_converts() {
        let err: EmployeeError = CacheError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.to_string(), "Cache error: Cache connection failed: refused");
    }
}
