//! SQLite repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use staffcache_core::employee::{Employee, NewEmployee};
use staffcache_core::storage::{EmployeeRepository, RepositoryError, Result};

use super::conversions::{format_date, format_datetime, row_to_employee, salary_to_sql};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based employee repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[allow(dead_code)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl EmployeeRepository for SqliteRepository {
    async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee> {
        let new_employee = employee.clone();
        let salary = salary_to_sql(employee.salary)?;
        let hired_date = format_date(&employee.hired_date);
        let now = Utc::now();
        let timestamp = format_datetime(&now);

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EMPLOYEE,
                    rusqlite::params![
                        new_employee.name,
                        new_employee.position,
                        salary,
                        hired_date,
                        timestamp,
                        timestamp,
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))?;

        tracing::debug!(employee_id = id, "Inserted employee row");
        Ok(Employee::from_new(id, employee.clone(), now))
    }

    async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_EMPLOYEE_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_employee) {
                    Ok(employee) => Ok(Some(employee)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn replace_employee(&self, employee: &Employee) -> Result<()> {
        let id = employee.id;
        let name = employee.name.clone();
        let position = employee.position.clone();
        let salary = salary_to_sql(employee.salary)?;
        let hired_date = format_date(&employee.hired_date);
        let updated_at = format_datetime(&employee.updated_at);

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_EMPLOYEE,
                        rusqlite::params![id, name, position, salary, hired_date, updated_at],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        let deleted_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::SOFT_DELETE_EMPLOYEE,
                        rusqlite::params![id, deleted_at],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id.to_string()))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_EMPLOYEES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_employee).map_err(wrap_err)?;

                let mut employees = Vec::new();
                for row_result in rows {
                    employees.push(row_result.map_err(wrap_err)?);
                }
                Ok(employees)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "unknown"))
    }
}
