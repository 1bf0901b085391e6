//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the employees table.
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    position TEXT NOT NULL,
    department TEXT NOT NULL
);
"#;

pub const INSERT_EMPLOYEE: &str = r#"
INSERT INTO employees (name, position, department)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_EMPLOYEES: &str = r#"
SELECT id, name, position, department
FROM employees
ORDER BY id ASC
"#;

pub const SELECT_EMPLOYEE_BY_ID: &str = r#"
SELECT id, name, position, department
FROM employees
WHERE id = ?1
"#;

pub const UPDATE_EMPLOYEE: &str = r#"
UPDATE employees
SET name = ?2, position = ?3, department = ?4
WHERE id = ?1
"#;

pub const DELETE_EMPLOYEE: &str = r#"
DELETE FROM employees
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS employees"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_statements_execute_against_schema() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        for sql in [
            INSERT_EMPLOYEE,
            SELECT_EMPLOYEES,
            SELECT_EMPLOYEE_BY_ID,
            UPDATE_EMPLOYEE,
            DELETE_EMPLOYEE,
            PING,
        ] {
            conn.prepare(sql)
                .unwrap_or_else(|e| panic!("failed to prepare {sql}: {e}"));
        }
    }
}
