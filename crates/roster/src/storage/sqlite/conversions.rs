//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without touching a database file.

use roster_core::employee::Employee;
use rusqlite::Row;

/// Convert a SQLite row to an Employee.
///
/// Expected columns: id, name, position, department
pub fn row_to_employee(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        department: row.get(3)?,
    })
}
