//! Handlers for the `/courses` resource, including prerequisite and
//! corequisite links.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::types::DbId;
use registrar_db::models::course::{Course, CreateCourse, UpdateCourse};
use registrar_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/v1/courses
pub async fn create(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = CourseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses?q=
///
/// `q` matches course code or title, case-insensitively.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list(&state.pool, params.q.as_deref()).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Prerequisites (directed: the linked course must be taken first)
// ---------------------------------------------------------------------------

/// GET /api/v1/courses/{id}/prerequisites
pub async fn list_prerequisites(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Course>>> {
    ensure_course_exists(&state, id).await?;
    let courses = CourseRepo::list_prerequisites(&state.pool, id).await?;
    Ok(Json(courses))
}

/// PUT /api/v1/courses/{id}/prerequisites/{other_id}
///
/// Idempotent: re-adding an existing link still returns 204.
pub async fn add_prerequisite(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path((id, other_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if id == other_id {
        return Err(AppError::Core(CoreError::Validation(
            "A course cannot be its own prerequisite".into(),
        )));
    }
    ensure_course_exists(&state, id).await?;
    ensure_course_exists(&state, other_id).await?;

    CourseRepo::add_prerequisite(&state.pool, id, other_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/courses/{id}/prerequisites/{other_id}
pub async fn remove_prerequisite(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path((id, other_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = CourseRepo::remove_prerequisite(&state.pool, id, other_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Prerequisite link",
            id: other_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Corequisites (symmetric: taken in the same term)
// ---------------------------------------------------------------------------

/// GET /api/v1/courses/{id}/corequisites
pub async fn list_corequisites(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Course>>> {
    ensure_course_exists(&state, id).await?;
    let courses = CourseRepo::list_corequisites(&state.pool, id).await?;
    Ok(Json(courses))
}

/// PUT /api/v1/courses/{id}/corequisites/{other_id}
///
/// Idempotent: re-adding an existing link still returns 204.
pub async fn add_corequisite(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path((id, other_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if id == other_id {
        return Err(AppError::Core(CoreError::Validation(
            "A course cannot be its own corequisite".into(),
        )));
    }
    ensure_course_exists(&state, id).await?;
    ensure_course_exists(&state, other_id).await?;

    CourseRepo::add_corequisite(&state.pool, id, other_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/courses/{id}/corequisites/{other_id}
pub async fn remove_corequisite(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path((id, other_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = CourseRepo::remove_corequisite(&state.pool, id, other_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Corequisite link",
            id: other_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_course_exists(state: &AppState, id: DbId) -> AppResult<()> {
    CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(())
}
