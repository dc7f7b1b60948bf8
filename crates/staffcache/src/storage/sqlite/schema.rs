//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    position TEXT NOT NULL,
    salary INTEGER NOT NULL CHECK (salary >= 0),
    hired_date TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_employees_deleted_at ON employees(deleted_at);
"#;

pub const INSERT_EMPLOYEE: &str = r#"
INSERT INTO employees (name, position, salary, hired_date, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_EMPLOYEE_BY_ID: &str = r#"
SELECT id, name, position, salary, hired_date, created_at, updated_at
FROM employees
WHERE id = ?1 AND deleted_at IS NULL
"#;

pub const SELECT_ALL_EMPLOYEES: &str = r#"
SELECT id, name, position, salary, hired_date, created_at, updated_at
FROM employees
WHERE deleted_at IS NULL
ORDER BY id ASC
"#;

pub const UPDATE_EMPLOYEE: &str = r#"
UPDATE employees
SET name = ?2, position = ?3, salary = ?4, hired_date = ?5, updated_at = ?6
WHERE id = ?1 AND deleted_at IS NULL
"#;

pub const SOFT_DELETE_EMPLOYEE: &str = r#"
UPDATE employees
SET deleted_at = ?2
WHERE id = ?1 AND deleted_at IS NULL
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS employees"));
        assert!(CREATE_TABLES.contains("deleted_at TEXT"));
    }

    #[test]
    fn test_reads_skip_soft_deleted_rows() {
        for query in [
            SELECT_EMPLOYEE_BY_ID,
            SELECT_ALL_EMPLOYEES,
            UPDATE_EMPLOYEE,
            SOFT_DELETE_EMPLOYEE,
        ] {
            assert!(query.contains("deleted_at IS NULL"), "{query}");
        }
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        assert!(SELECT_ALL_EMPLOYEES.contains("ORDER BY id ASC"));
    }
}
