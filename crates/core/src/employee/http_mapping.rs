//! Pure function for mapping employee errors to HTTP status codes.

use super::EmployeeError;

/// Maps an [`EmployeeError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Store` -> 500 (Internal Server Error)
/// - `Cache` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use staffcache_core::employee::{employee_error_to_status_code, EmployeeError};
///
/// assert_eq!(employee_error_to_status_code(&EmployeeError::NotFound { id: 1 }), 404);
/// ```
pub fn employee_error_to_status_code(error: &EmployeeError) -> u16 {
    match error {
        EmployeeError::Validation(_) => 400,
        EmployeeError::NotFound { .. } => 404,
        EmployeeError::Store(_) => 500,
        EmployeeError::Cache(_) => 500,
    }
}
