//! Handlers for the `/students` resource.
//!
//! A student profile extends a `student` user one-to-one; creating one
//! for a non-student account is rejected.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::roles::ROLE_STUDENT;
use registrar_core::types::DbId;
use registrar_db::models::student::{CreateStudent, Student, UpdateStudent};
use registrar_db::models::student_record::StudentRecord;
use registrar_db::repositories::{StudentRecordRepo, StudentRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// POST /api/v1/students
pub async fn create(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let user = UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    if user.role != ROLE_STUDENT {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Student profiles require a '{ROLE_STUDENT}' account; user {} has role '{}'",
            user.id, user.role
        ))));
    }

    let student = StudentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{user_id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: user_id,
        }))?;
    Ok(Json(student))
}

/// GET /api/v1/students/{user_id}/grades
///
/// A student's grade rows across all enrollment records. Students may
/// only read their own; staff and admins may read anyone's.
pub async fn list_grades(
    user: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<StudentRecord>>> {
    if user.role == ROLE_STUDENT && user.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Students may only view their own grades".into(),
        )));
    }

    // 404 for unknown students rather than an empty list.
    StudentRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: user_id,
        }))?;

    let grades = StudentRecordRepo::list_by_student(&state.pool, user_id).await?;
    Ok(Json(grades))
}

/// PUT /api/v1/students/{user_id}
pub async fn update(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: user_id,
        }))?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{user_id}
pub async fn delete(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: user_id,
        }))
    }
}
