//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::Row;

use staffcache_core::employee::{Employee, HIRED_DATE_FORMAT};
use staffcache_core::storage::RepositoryError;

/// Convert a SQLite row to an Employee.
///
/// Expected columns: id, name, position, salary, hired_date, created_at, updated_at
pub fn row_to_employee(row: &Row) -> rusqlite::Result<Employee> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let position: String = row.get(2)?;
    let salary: i64 = row.get(3)?;
    let hired_date: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Employee {
        id,
        name,
        position,
        salary: u64::try_from(salary)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))?,
        hired_date: parse_date(4, &hired_date)?,
        created_at: parse_datetime(5, &created_at)?,
        updated_at: parse_datetime(6, &updated_at)?,
    })
}

/// Convert a salary to SQLite's signed integer.
pub fn salary_to_sql(salary: u64) -> Result<i64, RepositoryError> {
    i64::try_from(salary)
        .map_err(|_| RepositoryError::InvalidData(format!("salary {salary} is out of range")))
}

fn parse_date(column: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, HIRED_DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format(HIRED_DATE_FORMAT).to_string()
}
