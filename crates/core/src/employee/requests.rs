//! API request and response bodies for employee operations.
//!
//! Shared between handlers and tests so both sides agree on the wire shape.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::EmployeeError;

/// Payload for creating an employee or replacing one wholesale.
///
/// There is no `id` here: ids are always assigned by storage. Unknown JSON
/// fields (including a caller-supplied `id`) are ignored. Only the object
/// form is accepted; a positional array is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeInput {
    pub name: String,
    pub position: String,
    pub department: String,
}

impl EmployeeInput {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
        }
    }

    /// Checks that every field carries a non-blank value.
    ///
    /// Fields are checked in declaration order and the first offender is reported.
    pub fn validate(&self) -> Result<(), EmployeeError> {
        for (field, value) in [
            ("name", &self.name),
            ("position", &self.position),
            ("department", &self.department),
        ] {
            if value.trim().is_empty() {
                return Err(EmployeeError::EmptyField { field });
            }
        }
        Ok(())
    }
}

const EMPLOYEE_INPUT_FIELDS: &[&str] = &["name", "position", "department"];

impl<'de> Deserialize<'de> for EmployeeInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("EmployeeInput", EMPLOYEE_INPUT_FIELDS, EmployeeInputVisitor)
    }
}

struct EmployeeInputVisitor;

impl<'de> Visitor<'de> for EmployeeInputVisitor {
    type Value = EmployeeInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with name, position and department")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name = None;
        let mut position = None;
        let mut department = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => next_field(&mut map, &mut name, "name")?,
                "position" => next_field(&mut map, &mut position, "position")?,
                "department" => next_field(&mut map, &mut department, "department")?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(EmployeeInput {
            name: name.ok_or_else(|| de::Error::missing_field("name"))?,
            position: position.ok_or_else(|| de::Error::missing_field("position"))?,
            department: department.ok_or_else(|| de::Error::missing_field("department"))?,
        })
    }
}

fn next_field<'de, A>(
    map: &mut A,
    slot: &mut Option<String>,
    field: &'static str,
) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(field));
    }
    *slot = Some(map.next_value()?);
    Ok(())
}

/// Fixed-message body returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn updated() -> Self {
        Self::new("Employee updated successfully")
    }

    pub fn deleted() -> Self {
        Self::new("Employee deleted successfully")
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_input() {
        let input = EmployeeInput::new("Ada", "Engineer", "R&D");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let input = EmployeeInput::new("", "Engineer", "R&D");
        assert_eq!(
            input.validate(),
            Err(EmployeeError::EmptyField { field: "name" })
        );
    }

    #[test]
    fn test_validate_rejects_whitespace_only_department() {
        let input = EmployeeInput::new("Ada", "Engineer", "   ");
        assert_eq!(
            input.validate(),
            Err(EmployeeError::EmptyField {
                field: "department"
            })
        );
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let input = EmployeeInput::new("Ada", "", "");
        assert_eq!(
            input.validate(),
            Err(EmployeeError::EmptyField { field: "position" })
        );
    }

    #[test]
    fn test_deserialize_ignores_caller_supplied_id() {
        let input: EmployeeInput = serde_json::from_str(
            r#"{"id": 42, "name": "Ada", "position": "Engineer", "department": "R&D"}"#,
        )
        .unwrap();

        assert_eq!(input, EmployeeInput::new("Ada", "Engineer", "R&D"));
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result: Result<EmployeeInput, _> =
            serde_json::from_str(r#"{"name": "Ada", "position": "Engineer"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_wrong_type() {
        let result: Result<EmployeeInput, _> =
            serde_json::from_str(r#"{"name": 5, "position": "Engineer", "department": "R&D"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_positional_array() {
        let result: Result<EmployeeInput, _> =
            serde_json::from_str(r#"["Ada", "Engineer", "R&D"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_field() {
        let result: Result<EmployeeInput, _> = serde_json::from_str(
            r#"{"name": "Ada", "name": "Grace", "position": "Engineer", "department": "R&D"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            serde_json::to_value(MessageResponse::updated()).unwrap(),
            serde_json::json!({"message": "Employee updated successfully"})
        );
        assert_eq!(
            serde_json::to_value(MessageResponse::deleted()).unwrap(),
            serde_json::json!({"message": "Employee deleted successfully"})
        );
    }

    #[test]
    fn test_error_detail_shape() {
        assert_eq!(
            serde_json::to_value(ErrorDetail::new("Employee not found")).unwrap(),
            serde_json::json!({"detail": "Employee not found"})
        );
    }
}
