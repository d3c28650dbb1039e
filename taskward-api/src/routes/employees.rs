/// Employee endpoints
///
/// # Endpoints
///
/// - `GET /api/hospitals/:id/employees` - List a hospital's employees
/// - `POST /api/hospitals/:id/employees` - Create employee under a hospital
/// - `GET /api/employees/:id` - Fetch employee

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{Json, PageQuery, Path, Query},
};
use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use taskward_shared::models::employee::{Employee, NewEmployee};
use taskward_shared::models::Page;

/// Employee creation body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeBody {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// List a hospital's employees
///
/// ```text
/// GET /api/hospitals/:id/employees?page=1&limit=20
/// ```
pub async fn list_employees(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<Employee>>> {
    let (offset, limit) = query.normalize();
    let page = state.employees.list(hospital_id, offset, limit).await?;
    Ok(Json(page))
}

/// Create an employee under a hospital
///
/// The path hospital must exist and the username must be non-empty. The
/// employee's hospital is taken from the path, never from the body.
///
/// ```text
/// POST /api/hospitals/:id/employees
/// {"username": "aaaa", "firstName": "Anna", "lastName": "Arnold"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: empty username
/// - `404 Not Found`: hospital absent
/// - `409 Conflict`: username already exists
pub async fn create_employee(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
    Json(body): Json<EmployeeBody>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    if body.username.is_empty() {
        return Err(ApiError::BadArgument("username is required".to_string()));
    }
    state.hospitals.get(hospital_id).await?;
    let employee = state
        .employees
        .create(NewEmployee {
            hospital_id,
            username: body.username,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Fetch an employee by id
///
/// ```text
/// GET /api/employees/:id
/// ```
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    let employee = state.employees.get(id).await?;
    Ok(Json(employee))
}
