//! Handlers for the `/admin/users` resource (admin-only user management).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::roles::{ROLE_ADMIN, ROLE_STAFF, ROLE_STUDENT};
use registrar_core::types::DbId;
use registrar_db::models::user::{CreateUser, UpdateUser, UserResponse};
use registrar_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_new_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/users`. The plaintext password is hashed
/// before it reaches the repository layer.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub password: String,
    pub role: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub name_suffix: String,
    #[serde(default)]
    pub permanent_address: String,
    #[serde(default)]
    pub current_address: String,
    #[serde(default)]
    pub emergency_number: String,
}

/// Request body for `POST /admin/users/{id}/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

/// Query parameters for `GET /admin/users`.
///
/// `missing_profile=staff` lists staff users with no professor profile;
/// `missing_profile=student` lists student users with no student profile.
/// Used by profile-creation forms to offer only eligible accounts.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub missing_profile: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/users
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_role(&input.role)?;
    validate_new_password(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        email: input.email,
        contact_number: input.contact_number,
        password_hash,
        role: input.role,
        first_name: input.first_name,
        middle_name: input.middle_name,
        last_name: input.last_name,
        name_suffix: input.name_suffix,
        permanent_address: input.permanent_address,
        current_address: input.current_address,
        emergency_number: input.emergency_number,
    };

    let user = UserRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/v1/admin/users
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = match params.missing_profile.as_deref() {
        Some(role @ (ROLE_STAFF | ROLE_STUDENT)) => {
            UserRepo::list_without_profile(&state.pool, role).await?
        }
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "missing_profile must be '{ROLE_STAFF}' or '{ROLE_STUDENT}', got '{other}'"
            )));
        }
        None => UserRepo::list(&state.pool).await?,
    };
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/admin/users/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}

/// PUT /api/v1/admin/users/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    if let Some(role) = &input.role {
        validate_role(role)?;
    }
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user.into()))
}

/// DELETE /api/v1/admin/users/{id}
///
/// Deactivates the account rather than deleting the row, so historical
/// records keep a valid owner.
pub async fn deactivate(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = UserRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

/// POST /api/v1/admin/users/{id}/reset-password
pub async fn reset_password(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_new_password(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, id, &password_hash).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_role(role: &str) -> Result<(), AppError> {
    match role {
        ROLE_ADMIN | ROLE_STAFF | ROLE_STUDENT => Ok(()),
        other => Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role '{other}'"
        )))),
    }
}
