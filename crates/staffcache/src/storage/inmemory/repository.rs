//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use staffcache_core::employee::{Employee, NewEmployee};
use staffcache_core::storage::{EmployeeRepository, RepositoryError, Result};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

/// In-memory storage backend.
///
/// Ids come from a monotonic sequence and are never reused, even after a
/// delete. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryRepository {
    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let created = Employee::from_new(table.last_id, employee.clone(), Utc::now());
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn replace_employee(&self, employee: &Employee) -> Result<()> {
        let mut table = self.table.write().await;
        let existing = table
            .rows
            .get_mut(&employee.id)
            .ok_or_else(|| RepositoryError::employee_not_found(employee.id))?;

        // created_at is owned by the store
        let created_at = existing.created_at;
        *existing = Employee {
            created_at,
            ..employee.clone()
        };
        Ok(())
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::employee_not_found(id))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }
}
