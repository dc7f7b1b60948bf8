/// Prefix shared by every employee cache key.
const EMPLOYEE_PREFIX: &str = "employee:";

/// Returns the cache key for a single employee.
///
/// # Examples
///
/// ```
/// use staffcache_core::cache::employee_key;
///
/// assert_eq!(employee_key(42), "employee:42");
/// ```
pub fn employee_key(employee_id: i64) -> String {
    format!("{EMPLOYEE_PREFIX}{employee_id}")
}
