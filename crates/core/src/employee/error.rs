use thiserror::Error;

/// Errors raised when an employee payload fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmployeeError {
    #[error("Field `{field}` cannot be empty")]
    EmptyField { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_error_display() {
        assert_eq!(
            EmployeeError::EmptyField { field: "name" }.to_string(),
            "Field `name` cannot be empty"
        );
    }
}
