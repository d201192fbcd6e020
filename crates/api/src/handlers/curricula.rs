//! Handlers for the `/curricula` resource and its course entries.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::types::DbId;
use registrar_db::models::curriculum::{
    CreateCurriculum, CreateCurriculumCourse, Curriculum, CurriculumCourse, UpdateCurriculum,
    UpdateCurriculumCourse,
};
use registrar_db::repositories::CurriculumRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// POST /api/v1/curricula
pub async fn create(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateCurriculum>,
) -> AppResult<(StatusCode, Json<Curriculum>)> {
    let curriculum = CurriculumRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(curriculum)))
}

/// GET /api/v1/curricula
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Curriculum>>> {
    let curricula = CurriculumRepo::list(&state.pool).await?;
    Ok(Json(curricula))
}

/// GET /api/v1/curricula/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Curriculum>> {
    let curriculum = CurriculumRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Curriculum",
            id,
        }))?;
    Ok(Json(curriculum))
}

/// PUT /api/v1/curricula/{id}
pub async fn update(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCurriculum>,
) -> AppResult<Json<Curriculum>> {
    let curriculum = CurriculumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Curriculum",
            id,
        }))?;
    Ok(Json(curriculum))
}

/// DELETE /api/v1/curricula/{id}
pub async fn delete(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CurriculumRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Curriculum",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Course entries
// ---------------------------------------------------------------------------

/// POST /api/v1/curricula/{id}/courses
///
/// Places a course in the curriculum at a year level and academic term.
/// The curriculum id comes from the URL path.
pub async fn add_course(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(curriculum_id): Path<DbId>,
    Json(input): Json<CreateCurriculumCourse>,
) -> AppResult<(StatusCode, Json<CurriculumCourse>)> {
    CurriculumRepo::find_by_id(&state.pool, curriculum_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Curriculum",
            id: curriculum_id,
        }))?;

    let entry = CurriculumRepo::add_course(&state.pool, curriculum_id, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/curricula/{id}/courses
pub async fn list_courses(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(curriculum_id): Path<DbId>,
) -> AppResult<Json<Vec<CurriculumCourse>>> {
    CurriculumRepo::find_by_id(&state.pool, curriculum_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Curriculum",
            id: curriculum_id,
        }))?;

    let entries = CurriculumRepo::list_courses(&state.pool, curriculum_id).await?;
    Ok(Json(entries))
}

/// PUT /api/v1/curricula/{curriculum_id}/courses/{entry_id}
pub async fn update_entry(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path((_curriculum_id, entry_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCurriculumCourse>,
) -> AppResult<Json<CurriculumCourse>> {
    let entry = CurriculumRepo::update_entry(&state.pool, entry_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CurriculumCourse",
            id: entry_id,
        }))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/curricula/{curriculum_id}/courses/{entry_id}
pub async fn remove_entry(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path((_curriculum_id, entry_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = CurriculumRepo::remove_entry(&state.pool, entry_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "CurriculumCourse",
            id: entry_id,
        }))
    }
}
