//! Façade endpoint handlers.
//!
//! # Responsibilities
//! - Translate HTTP requests into service calls
//! - Encode service results as JSON responses
//!
//! # Design Decisions
//! - Handlers hold no logic beyond the presence/absence mapping;
//!   everything else lives in the service layer

use axum::extract::{Path, State};
use axum::Json;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::model::{CreateEmployeeInput, Employee};

/// `GET /employee` — all employees, 404 when there are none.
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.service.list_all().await?;
    if employees.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(employees))
}

/// `GET /employee/search/{name}` — substring search, 404 on no match.
pub async fn search_employees(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.service.search_by_name(&name).await?;
    if employees.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(employees))
}

/// `GET /employee/{id}` — single employee, 404 when absent.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    match state.service.get_by_id(&id).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(ApiError::NotFound),
    }
}

/// `GET /employee/highestSalary` — maximum salary, 0 when empty.
pub async fn highest_salary(State(state): State<AppState>) -> Result<Json<i32>, ApiError> {
    Ok(Json(state.service.highest_salary().await?))
}

/// `GET /employee/topTenHighestEarningEmployeeNames` — always 200,
/// possibly an empty list.
pub async fn top_earners(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.service.top10_earner_names().await?))
}

/// `POST /employee` — create upstream, 500 when unconfirmed.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployeeInput>,
) -> Result<Json<Employee>, ApiError> {
    match state.service.create(input).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(ApiError::CreateFailed),
    }
}

/// `DELETE /employee/{id}` — returns the deleted name, 404 when the
/// lookup or the upstream confirmation fails.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    match state.service.delete_by_id(&id).await? {
        Some(name) => Ok(name),
        None => Err(ApiError::NotFound),
    }
}
