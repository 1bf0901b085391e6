//! Employee CRUD handlers.
//!
//! Bodies and path ids are extracted as `Result`s so that every malformed
//! request is funnelled through [`AppError`] and answered with 422 before
//! storage is touched.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use roster_core::employee::{Employee, EmployeeId, EmployeeInput, MessageResponse, ENTITY_TYPE};
use roster_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Unwraps and validates an employee payload.
fn validated_input(
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<EmployeeInput, AppError> {
    let Json(input) = payload?;
    input.validate()?;
    Ok(input)
}

/// Decides what to do when an update or delete matched no row.
///
/// By default the request still succeeds; strict mode turns it into a 404.
fn handle_missing_row(
    state: &AppState,
    id: EmployeeId,
    action: &'static str,
) -> Result<(), AppError> {
    if state.config.strict_not_found {
        return Err(RepositoryError::not_found(ENTITY_TYPE, id).into());
    }

    tracing::warn!(employee_id = id, action, "No employee matched; reporting success");
    Ok(())
}

/// Create an employee (POST /employees/).
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, AppError> {
    let input = validated_input(payload)?;

    let id = state.employee_repo.create_employee(&input).await?;

    tracing::info!(employee_id = id, "Created employee");

    Ok(Json(Employee::from_input(id, input)))
}

/// List all employees (GET /employees/).
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employee_repo.list_employees().await?;
    Ok(Json(employees))
}

/// Get a single employee by ID (GET /employees/{id}).
pub async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> Result<Json<Employee>, AppError> {
    let Path(id) = path?;

    match state.employee_repo.get_employee(id).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(RepositoryError::not_found(ENTITY_TYPE, id).into()),
    }
}

/// Replace an employee by ID (PUT /employees/{id}).
pub async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let input = validated_input(payload)?;

    if state.employee_repo.update_employee(id, &input).await? {
        tracing::info!(employee_id = id, "Updated employee");
    } else {
        handle_missing_row(&state, id, "update")?;
    }

    Ok(Json(MessageResponse::updated()))
}

/// Delete an employee by ID (DELETE /employees/{id}).
pub async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;

    if state.employee_repo.delete_employee(id).await? {
        tracing::info!(employee_id = id, "Deleted employee");
    } else {
        handle_missing_row(&state, id, "delete")?;
    }

    Ok(Json(MessageResponse::deleted()))
}
