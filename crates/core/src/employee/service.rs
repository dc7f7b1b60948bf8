use async_trait::async_trait;

use super::{CreateEmployeeRequest, EmployeeView, Result, UpdateEmployeeRequest};

/// The employee operations exposed to the HTTP layer.
///
/// Implementations decide how the durable store and the cache are combined;
/// callers only see projections and [`EmployeeError`](super::EmployeeError)s.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Creates an employee and returns its `created_at` projection.
    async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<EmployeeView>;

    /// Gets an employee by id.
    async fn get_employee(&self, id: i64) -> Result<EmployeeView>;

    /// Applies a partial update and returns the `updated_at` projection.
    async fn update_employee(&self, id: i64, request: UpdateEmployeeRequest)
        -> Result<EmployeeView>;

    /// Deletes an employee.
    async fn delete_employee(&self, id: i64) -> Result<()>;

    /// Lists every employee in storage order.
    async fn list_employees(&self) -> Result<Vec<EmployeeView>>;
}
