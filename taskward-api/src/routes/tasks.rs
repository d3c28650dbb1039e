/// Task endpoints
///
/// # Endpoints
///
/// - `GET /api/hospitals/:id/tasks` - List a hospital's tasks
/// - `GET /api/employees/:id/tasks` - List an employee's tasks
/// - `POST /api/hospitals/:id/tasks` - Create task under a hospital
/// - `PUT /api/tasks/:id` - Overwrite a task's mutable fields
/// - `POST /api/tasks/:id/assign` - Re-assign a task to another employee

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{Json, PageQuery, Path, Query},
};
use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use taskward_shared::models::task::{NewTask, Task, TaskPriority, TaskStatus};
use taskward_shared::models::Page;

/// Task request body (create and update)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskBody {
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
}

/// Re-assignment body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignTaskBody {
    pub owner_id: i64,
}

/// Validates the shared task fields and parses the enums
///
/// Owner id must be positive, title non-empty, and priority/status members
/// of their enumerations; any violation is a `BadArgument`.
fn validate_task(body: &TaskBody) -> Result<(TaskPriority, TaskStatus), ApiError> {
    if body.owner_id <= 0 {
        return Err(ApiError::BadArgument("invalid owner id".to_string()));
    }
    if body.title.is_empty() {
        return Err(ApiError::BadArgument("invalid title".to_string()));
    }
    let priority = TaskPriority::from_str(&body.priority)
        .ok_or_else(|| ApiError::BadArgument("invalid priority".to_string()))?;
    let status = TaskStatus::from_str(&body.status)
        .ok_or_else(|| ApiError::BadArgument("invalid status".to_string()))?;
    Ok((priority, status))
}

/// List a hospital's tasks
///
/// The path hospital must exist (404 otherwise).
///
/// ```text
/// GET /api/hospitals/:id/tasks?page=1&limit=20
/// ```
pub async fn list_hospital_tasks(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<Task>>> {
    let (offset, limit) = query.normalize();
    state.hospitals.get(hospital_id).await?;
    let page = state.tasks.list_by_hospital(hospital_id, offset, limit).await?;
    Ok(Json(page))
}

/// List an employee's tasks
///
/// The path employee must exist (404 otherwise).
///
/// ```text
/// GET /api/employees/:id/tasks?page=1&limit=20
/// ```
pub async fn list_employee_tasks(
    State(state): State<AppState>,
    Path(owner_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<Task>>> {
    let (offset, limit) = query.normalize();
    state.employees.get(owner_id).await?;
    let page = state.tasks.list_by_owner(owner_id, offset, limit).await?;
    Ok(Json(page))
}

/// Create a task under a hospital
///
/// The path hospital and the body owner must both exist, and the owner must
/// belong to the path hospital (403 otherwise). The initial status is
/// forced to OPEN regardless of what the body says.
///
/// ```text
/// POST /api/hospitals/:id/tasks
/// {"ownerId": 1, "title": "rounds", "priority": "URGENT", "status": "OPEN"}
/// ```
pub async fn create_task(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
    Json(body): Json<TaskBody>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let (priority, _) = validate_task(&body)?;
    state.hospitals.get(hospital_id).await?;
    let owner = state.employees.get(body.owner_id).await?;
    if owner.hospital_id != hospital_id {
        return Err(ApiError::PermissionDenied("forbidden".to_string()));
    }
    let task = state
        .tasks
        .create(NewTask {
            hospital_id,
            owner_id: owner.id,
            title: body.title,
            description: body.description,
            priority,
            // The initial status
            status: TaskStatus::Open,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Overwrite a task's mutable fields
///
/// The task is fetched by its own id and title/description/priority/status
/// and owner are overwritten wholesale from the body. The owner's hospital
/// is not re-checked against the task here; only the assign endpoint does
/// that. Success is 200 with an empty body.
///
/// ```text
/// PUT /api/tasks/:id
/// {"ownerId": 1, "title": "rounds", "priority": "LOW", "status": "COMPLETED"}
/// ```
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<TaskBody>,
) -> ApiResult<()> {
    let (priority, status) = validate_task(&body)?;
    let mut task = state.tasks.get(id).await?;
    task.owner_id = body.owner_id;
    task.title = body.title;
    task.description = body.description;
    task.priority = priority;
    task.status = status;
    state.tasks.update(&task).await?;
    Ok(())
}

/// Re-assign a task to another employee
///
/// The task and the new owner must both exist, and the new owner's hospital
/// must equal the task's current hospital (403 otherwise). Only `owner_id`
/// changes; every other field is re-persisted as-is. Success is 200 with an
/// empty body.
///
/// ```text
/// POST /api/tasks/:id/assign
/// {"ownerId": 2}
/// ```
pub async fn assign_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AssignTaskBody>,
) -> ApiResult<()> {
    let mut task = state.tasks.get(id).await?;
    let employee = state.employees.get(body.owner_id).await?;
    if task.hospital_id != employee.hospital_id {
        return Err(ApiError::PermissionDenied("forbidden".to_string()));
    }
    task.owner_id = employee.id;
    state.tasks.update(&task).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> TaskBody {
        TaskBody {
            owner_id: 1,
            title: "rounds".to_string(),
            description: String::new(),
            priority: "URGENT".to_string(),
            status: "OPEN".to_string(),
        }
    }

    #[test]
    fn test_validate_task_ok() {
        let (priority, status) = validate_task(&valid_body()).unwrap();
        assert_eq!(priority, TaskPriority::Urgent);
        assert_eq!(status, TaskStatus::Open);
    }

    #[test]
    fn test_validate_task_rejects_nonpositive_owner() {
        let body = TaskBody {
            owner_id: 0,
            ..valid_body()
        };
        assert!(matches!(
            validate_task(&body),
            Err(ApiError::BadArgument(_))
        ));
    }

    #[test]
    fn test_validate_task_rejects_empty_title() {
        let body = TaskBody {
            title: String::new(),
            ..valid_body()
        };
        assert!(matches!(
            validate_task(&body),
            Err(ApiError::BadArgument(_))
        ));
    }

    #[test]
    fn test_validate_task_rejects_unknown_priority() {
        let body = TaskBody {
            priority: "SOMEDAY".to_string(),
            ..valid_body()
        };
        assert!(matches!(
            validate_task(&body),
            Err(ApiError::BadArgument(_))
        ));
    }

    #[test]
    fn test_validate_task_rejects_unknown_status() {
        let body = TaskBody {
            status: "DONE".to_string(),
            ..valid_body()
        };
        assert!(matches!(
            validate_task(&body),
            Err(ApiError::BadArgument(_))
        ));
    }

    #[test]
    fn test_missing_body_fields_default() {
        let body: TaskBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.owner_id, 0);
        assert!(body.title.is_empty());
    }
}
