//! Handlers for standalone `/meetings` operations: lookup, update,
//! delete, and the dry-run conflict check.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::schedule::{MeetingDraft, Weekday};
use registrar_core::types::DbId;
use registrar_db::models::meeting::{Meeting, MeetingDraftRequest, UpdateMeeting};
use registrar_db::repositories::MeetingRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// Response body for `POST /meetings/validate`.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// `true` when the candidate may be saved as-is. Incomplete
    /// candidates report `true`; the definitive check runs on save.
    pub valid: bool,
    /// Conflict description when `valid` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<String>,
}

/// GET /api/v1/meetings/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Meeting>> {
    let meeting = MeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))?;
    Ok(Json(meeting))
}

/// PUT /api/v1/meetings/{id}
///
/// The merged candidate (stored values plus the patch) re-runs the
/// conflict check, excluding the meeting's own row so an unchanged
/// schedule never conflicts with itself.
pub async fn update(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeeting>,
) -> AppResult<Json<Meeting>> {
    let meeting = MeetingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))?;
    Ok(Json(meeting))
}

/// DELETE /api/v1/meetings/{id}
pub async fn delete(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MeetingRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))
    }
}

/// POST /api/v1/meetings/validate
///
/// Dry-run conflict check for a possibly-partial candidate, used by
/// scheduling forms to surface conflicts before submission. Nothing is
/// written.
pub async fn validate(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<MeetingDraftRequest>,
) -> AppResult<Json<ValidateResponse>> {
    let day = match input.day {
        Some(d) => Some(Weekday::from_i16(d).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "day must be 1 (Monday) to 7 (Sunday), got {d}"
            )))
        })?),
        None => None,
    };
    if let (Some(start), Some(end)) = (input.start_time, input.end_time) {
        if start >= end {
            return Err(AppError::Core(CoreError::Validation(
                "start_time must be before end_time".into(),
            )));
        }
    }

    let draft = MeetingDraft {
        room_id: input.room_id,
        professor_id: input.professor_id,
        day,
        start: input.start_time,
        end: input.end_time,
    };

    let conflict = MeetingRepo::validate_draft(&state.pool, &draft, input.exclude_id).await?;

    Ok(Json(ValidateResponse {
        valid: conflict.is_none(),
        conflict: conflict.map(|c| c.to_string()),
    }))
}
