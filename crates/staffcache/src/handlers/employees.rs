use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use staffcache_core::employee::{
    parse_employee_id, CreateEmployeeRequest, EmployeeError, EmployeeView, UpdateEmployeeRequest,
};

use crate::{handlers::AppError, state::AppState};

/// Maps a body rejection to the generic validation message.
fn invalid_input(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection, "Rejected request body");
    EmployeeError::validation("Invalid input").into()
}

/// List all employees (GET /employees).
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeView>>, AppError> {
    let employees = state.employees.list_employees().await?;
    Ok(Json(employees))
}

/// Create a new employee (POST /employees).
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(invalid_input)?;

    let employee = state.employees.create_employee(request).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Get a single employee by ID (GET /employees/{id}).
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeView>, AppError> {
    let id = parse_employee_id(&id)?;
    let employee = state.employees.get_employee(id).await?;
    Ok(Json(employee))
}

/// Update an employee by ID (PUT /employees/{id}).
///
/// Fields that are missing, empty or zero are left unchanged.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeView>, AppError> {
    let id = parse_employee_id(&id)?;
    let Json(request) = payload.map_err(invalid_input)?;

    let employee = state.employees.update_employee(id, request).await?;

    Ok(Json(employee))
}

/// Delete an employee by ID (DELETE /employees/{id}).
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_employee_id(&id)?;
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
