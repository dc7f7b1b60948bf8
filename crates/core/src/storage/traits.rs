use async_trait::async_trait;

use crate::employee::{Employee, NewEmployee};

use super::Result;

/// Repository for employee records. This is the authoritative store.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persists a new employee, assigning its id and timestamps.
    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee>;

    /// Gets an employee by its ID. Deleted employees are `None`.
    async fn get_employee(&self, id: i64) -> Result<Option<Employee>>;

    /// Replaces every mutable field of an existing employee.
    ///
    /// `created_at` is kept by the store; `updated_at` is taken from the
    /// given record. Fails with `NotFound` if the employee does not exist.
    async fn replace_employee(&self, employee: &Employee) -> Result<()>;

    /// Deletes an employee by its ID. Fails with `NotFound` if absent.
    async fn delete_employee(&self, id: i64) -> Result<()>;

    /// Lists all employees ordered by id.
    async fn list_employees(&self) -> Result<Vec<Employee>>;
}
