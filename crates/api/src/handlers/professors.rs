//! Handlers for the `/professors` resource.
//!
//! A professor profile extends a `staff` user one-to-one; creating one
//! for a non-staff account is rejected.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::roles::ROLE_STAFF;
use registrar_core::types::DbId;
use registrar_db::models::professor::{CreateProfessor, Professor, UpdateProfessor};
use registrar_db::repositories::{ProfessorRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// POST /api/v1/professors
pub async fn create(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateProfessor>,
) -> AppResult<(StatusCode, Json<Professor>)> {
    let user = UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    if user.role != ROLE_STAFF {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Professor profiles require a '{ROLE_STAFF}' account; user {} has role '{}'",
            user.id, user.role
        ))));
    }

    let professor = ProfessorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(professor)))
}

/// GET /api/v1/professors
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Professor>>> {
    let professors = ProfessorRepo::list(&state.pool).await?;
    Ok(Json(professors))
}

/// GET /api/v1/professors/{user_id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Professor>> {
    let professor = ProfessorRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Professor",
            id: user_id,
        }))?;
    Ok(Json(professor))
}

/// PUT /api/v1/professors/{user_id}
pub async fn update(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateProfessor>,
) -> AppResult<Json<Professor>> {
    let professor = ProfessorRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Professor",
            id: user_id,
        }))?;
    Ok(Json(professor))
}

/// DELETE /api/v1/professors/{user_id}
pub async fn delete(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProfessorRepo::delete(&state.pool, user_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Professor",
            id: user_id,
        }))
    }
}
