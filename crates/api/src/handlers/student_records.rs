//! Handlers for standalone `/student-records` operations (grading).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::grading::{validate_grade, Remark};
use registrar_core::types::DbId;
use registrar_db::models::student_record::{StudentRecord, UpdateStudentRecord};
use registrar_db::repositories::StudentRecordRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// GET /api/v1/student-records/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StudentRecord>> {
    let row = StudentRecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudentRecord",
            id,
        }))?;
    Ok(Json(row))
}

/// PUT /api/v1/student-records/{id}
///
/// Sets or clears a grade. Rating and remark must agree: PSD needs
/// 75-100, FLD a nonzero rating below 75, DRP/INC a rating of 0, and
/// a grade is cleared by sending both as null.
pub async fn update_grade(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudentRecord>,
) -> AppResult<Json<StudentRecord>> {
    let remark = parse_remark(input.remark.as_deref())?;
    validate_grade(input.rating, remark).map_err(AppError::Core)?;

    let row = StudentRecordRepo::update_grade(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudentRecord",
            id,
        }))?;
    Ok(Json(row))
}

/// DELETE /api/v1/student-records/{id}
///
/// Drops the student from the record entirely.
pub async fn delete(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StudentRecordRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "StudentRecord",
            id,
        }))
    }
}

/// Parse an optional remark code (`PSD`, `FLD`, `DRP`, `INC`).
pub(crate) fn parse_remark(code: Option<&str>) -> Result<Option<Remark>, AppError> {
    match code {
        None => Ok(None),
        Some(code) => Remark::from_code(code)
            .map(Some)
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!("Unknown remark '{code}'")))
            }),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_remark_accepts_known_codes() {
        assert_matches!(parse_remark(None), Ok(None));
        assert_matches!(parse_remark(Some("PSD")), Ok(Some(Remark::Passed)));
        assert_matches!(parse_remark(Some("INC")), Ok(Some(Remark::Incomplete)));
    }

    #[test]
    fn parse_remark_rejects_unknown_codes() {
        assert_matches!(
            parse_remark(Some("XYZ")),
            Err(AppError::Core(CoreError::Validation(_)))
        );
        assert_matches!(
            parse_remark(Some("psd")),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}
