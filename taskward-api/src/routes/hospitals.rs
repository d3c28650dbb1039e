/// Hospital endpoints
///
/// # Endpoints
///
/// - `GET /api/hospitals` - List hospitals with pagination
/// - `POST /api/hospitals` - Create hospital
/// - `GET /api/hospitals/:id` - Fetch hospital
/// - `PUT /api/hospitals/:id` - Update name/display name

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{Json, PageQuery, Path, Query},
};
use axum::{extract::State, http::StatusCode};
use serde::Deserialize;
use taskward_shared::models::hospital::{Hospital, NewHospital};
use taskward_shared::models::Page;

/// Hospital request body (create and update)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HospitalBody {
    pub name: String,
    pub display_name: String,
}

/// List hospitals
///
/// ```text
/// GET /api/hospitals?page=1&limit=20
/// ```
pub async fn list_hospitals(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<Hospital>>> {
    let (offset, limit) = query.normalize();
    let page = state.hospitals.list(offset, limit).await?;
    Ok(Json(page))
}

/// Create a hospital
///
/// ```text
/// POST /api/hospitals
/// {"name": "mine", "displayName": "My Hospital"}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: empty name
/// - `409 Conflict`: name already exists
pub async fn create_hospital(
    State(state): State<AppState>,
    Json(body): Json<HospitalBody>,
) -> ApiResult<(StatusCode, Json<Hospital>)> {
    if body.name.is_empty() {
        return Err(ApiError::BadArgument("name is required".to_string()));
    }
    let hospital = state
        .hospitals
        .create(NewHospital {
            name: body.name,
            display_name: body.display_name,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(hospital)))
}

/// Fetch a hospital by id
///
/// ```text
/// GET /api/hospitals/:id
/// ```
pub async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Hospital>> {
    let hospital = state.hospitals.get(id).await?;
    Ok(Json(hospital))
}

/// Update a hospital's name and display name
///
/// Fetches the current record, merges the two mutable fields, and persists
/// the result. Success is 200 with an empty body.
///
/// ```text
/// PUT /api/hospitals/:id
/// {"name": "mine", "displayName": "Renamed"}
/// ```
pub async fn update_hospital(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<HospitalBody>,
) -> ApiResult<()> {
    if body.name.is_empty() {
        return Err(ApiError::BadArgument("name is required".to_string()));
    }
    let mut hospital = state.hospitals.get(id).await?;
    hospital.name = body.name;
    hospital.display_name = body.display_name;
    state.hospitals.update(&hospital).await?;
    Ok(())
}
