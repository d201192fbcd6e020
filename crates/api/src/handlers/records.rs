//! Handlers for the `/records` resource (course offerings) and the
//! meetings and student enrollments nested under a record.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use registrar_core::error::CoreError;
use registrar_core::grading::validate_grade;
use registrar_core::types::DbId;
use registrar_db::models::meeting::{CreateMeeting, Meeting};
use registrar_db::models::record::{CreateRecord, Record, RecordFilter, UpdateRecord};
use registrar_db::models::student_record::{CreateStudentRecord, StudentRecord};
use registrar_db::repositories::{MeetingRepo, RecordRepo, StudentRecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::handlers::student_records::parse_remark;
use crate::state::AppState;

/// POST /api/v1/records
pub async fn create(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateRecord>,
) -> AppResult<(StatusCode, Json<Record>)> {
    let record = RecordRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/records?academic_year=&academic_term=&advisor_id=&section_id=
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(filter): Query<RecordFilter>,
) -> AppResult<Json<Vec<Record>>> {
    let records = RecordRepo::list(&state.pool, &filter).await?;
    Ok(Json(records))
}

/// GET /api/v1/records/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Record>> {
    let record = RecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;
    Ok(Json(record))
}

/// PUT /api/v1/records/{id}
pub async fn update(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRecord>,
) -> AppResult<Json<Record>> {
    let record = RecordRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;
    Ok(Json(record))
}

/// DELETE /api/v1/records/{id}
///
/// Deletes the record together with all its meetings and student grade
/// rows in one transaction.
pub async fn delete(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RecordRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Nested: meetings
// ---------------------------------------------------------------------------

/// POST /api/v1/records/{id}/meetings
///
/// Creates a weekly meeting slot for the record. The write is rejected
/// with 409 if it overlaps an existing meeting in the same room or under
/// the same instructor.
pub async fn create_meeting(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(record_id): Path<DbId>,
    Json(mut input): Json<CreateMeeting>,
) -> AppResult<(StatusCode, Json<Meeting>)> {
    ensure_record_exists(&state, record_id).await?;
    input.record_id = Some(record_id);

    let meeting = MeetingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(meeting)))
}

/// GET /api/v1/records/{id}/meetings
pub async fn list_meetings(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(record_id): Path<DbId>,
) -> AppResult<Json<Vec<Meeting>>> {
    ensure_record_exists(&state, record_id).await?;
    let meetings = MeetingRepo::list_by_record(&state.pool, record_id).await?;
    Ok(Json(meetings))
}

// ---------------------------------------------------------------------------
// Nested: student enrollments
// ---------------------------------------------------------------------------

/// POST /api/v1/records/{id}/students
///
/// Enrolls a student in the record, optionally with an initial grade.
pub async fn enroll_student(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(record_id): Path<DbId>,
    Json(input): Json<CreateStudentRecord>,
) -> AppResult<(StatusCode, Json<StudentRecord>)> {
    ensure_record_exists(&state, record_id).await?;

    let remark = parse_remark(input.remark.as_deref())?;
    validate_grade(input.rating, remark).map_err(AppError::Core)?;

    let row = StudentRecordRepo::create(&state.pool, record_id, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/records/{id}/students
pub async fn list_students(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(record_id): Path<DbId>,
) -> AppResult<Json<Vec<StudentRecord>>> {
    ensure_record_exists(&state, record_id).await?;
    let rows = StudentRecordRepo::list_by_record(&state.pool, record_id).await?;
    Ok(Json(rows))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_record_exists(state: &AppState, id: DbId) -> AppResult<()> {
    RecordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Record",
            id,
        }))?;
    Ok(())
}
