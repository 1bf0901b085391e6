use serde::{Deserialize, Serialize};

use super::requests::EmployeeInput;

/// Identifier assigned by storage when an employee is created.
pub type EmployeeId = i64;

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub department: String,
}

impl Employee {
    /// Builds the stored record from a storage-assigned id and the payload it was created from.
    pub fn from_input(id: EmployeeId, input: EmployeeInput) -> Self {
        Self {
            id,
            name: input.name,
            position: input.position,
            department: input.department,
        }
    }

    /// Replaces every mutable field with the values from `input`.
    ///
    /// Updates are full replacements; nothing from the previous record is merged.
    pub fn replace_with(&mut self, input: EmployeeInput) {
        self.name = input.name;
        self.position = input.position;
        self.department = input.department;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_keeps_fields() {
        let input = EmployeeInput::new("Ada", "Engineer", "R&D");
        let employee = Employee::from_input(7, input);

        assert_eq!(employee.id, 7);
        assert_eq!(employee.name, "Ada");
        assert_eq!(employee.position, "Engineer");
        assert_eq!(employee.department, "R&D");
    }

    #[test]
    fn test_replace_with_overwrites_all_fields() {
        let mut employee = Employee::from_input(1, EmployeeInput::new("Ada", "Engineer", "R&D"));
        employee.replace_with(EmployeeInput::new("Grace", "Admiral", "Navy"));

        assert_eq!(
            employee,
            Employee {
                id: 1,
                name: "Grace".to_string(),
                position: "Admiral".to_string(),
                department: "Navy".to_string(),
            }
        );
    }

    #[test]
    fn test_serializes_with_id_first() {
        let employee = Employee::from_input(1, EmployeeInput::new("Ada", "Engineer", "R&D"));
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Ada",
                "position": "Engineer",
                "department": "R&D"
            })
        );
    }
}
