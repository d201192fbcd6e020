//! HTTP-level integration tests for meeting scheduling and conflict
//! detection: room and instructor double-booking, boundary handling,
//! self-exclusion on updates, and the dry-run validate endpoint.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{
    body_json, create_test_user, delete_auth, get_auth, post_json_auth, put_json_auth,
};
use registrar_core::roles::ROLE_STAFF;
use registrar_core::types::DbId;
use registrar_db::models::course::CreateCourse;
use registrar_db::models::curriculum::{CreateCurriculum, CreateCurriculumCourse};
use registrar_db::models::department::CreateDepartment;
use registrar_db::models::professor::CreateProfessor;
use registrar_db::models::program::CreateProgram;
use registrar_db::models::record::CreateRecord;
use registrar_db::models::room::CreateRoom;
use registrar_db::models::section::CreateSection;
use registrar_db::repositories::{
    CourseRepo, CurriculumRepo, DepartmentRepo, ProfessorRepo, ProgramRepo, RecordRepo, RoomRepo,
    SectionRepo,
};
use sqlx::PgPool;

/// Everything a meeting needs: a record to hang off, two rooms, and two
/// professors (the first doubles as the record's advisor).
struct ScheduleFixture {
    record_id: DbId,
    other_record_id: DbId,
    room_a: DbId,
    room_b: DbId,
    prof_a: DbId,
    prof_b: DbId,
}

async fn seed_schedule(pool: &PgPool) -> ScheduleFixture {
    let department = DepartmentRepo::create(
        pool,
        &CreateDepartment {
            title: "College of Engineering".to_string(),
        },
    )
    .await
    .expect("department seed");

    let program = ProgramRepo::create(
        pool,
        &CreateProgram {
            title: "BS Computer Engineering".to_string(),
            department_id: department.id,
        },
    )
    .await
    .expect("program seed");

    let curriculum = CurriculumRepo::create(
        pool,
        &CreateCurriculum {
            title: "CpE 2025 Curriculum".to_string(),
            program_id: program.id,
        },
    )
    .await
    .expect("curriculum seed");

    let course = CourseRepo::create(
        pool,
        &CreateCourse {
            code: "CPE 401".to_string(),
            title: "Operating Systems".to_string(),
            units: 3.0,
        },
    )
    .await
    .expect("course seed");

    let entry = CurriculumRepo::add_course(
        pool,
        curriculum.id,
        &CreateCurriculumCourse {
            curriculum_id: None,
            course_id: course.id,
            year_level: 4,
            academic_term: 1,
        },
    )
    .await
    .expect("curriculum course seed");

    let section_a = SectionRepo::create(
        pool,
        &CreateSection {
            name: "4A".to_string(),
            is_open: true,
        },
    )
    .await
    .expect("section seed");
    let section_b = SectionRepo::create(
        pool,
        &CreateSection {
            name: "4B".to_string(),
            is_open: true,
        },
    )
    .await
    .expect("section seed");

    let (staff_a, _) = create_test_user(pool, "prof_alpha", ROLE_STAFF).await;
    let (staff_b, _) = create_test_user(pool, "prof_beta", ROLE_STAFF).await;
    let prof_a = ProfessorRepo::create(
        pool,
        &CreateProfessor {
            user_id: staff_a.id,
            title_prefix: "Engr.".to_string(),
            title_suffix: String::new(),
        },
    )
    .await
    .expect("professor seed");
    let prof_b = ProfessorRepo::create(
        pool,
        &CreateProfessor {
            user_id: staff_b.id,
            title_prefix: "Dr.".to_string(),
            title_suffix: String::new(),
        },
    )
    .await
    .expect("professor seed");

    let record = RecordRepo::create(
        pool,
        &CreateRecord {
            academic_year: 2025,
            academic_term: 1,
            curriculum_course_id: entry.id,
            advisor_id: prof_a.user_id,
            section_id: section_a.id,
        },
    )
    .await
    .expect("record seed");
    let other_record = RecordRepo::create(
        pool,
        &CreateRecord {
            academic_year: 2025,
            academic_term: 1,
            curriculum_course_id: entry.id,
            advisor_id: prof_b.user_id,
            section_id: section_b.id,
        },
    )
    .await
    .expect("record seed");

    let room_a = RoomRepo::create(
        pool,
        &CreateRoom {
            number: "E-301".to_string(),
        },
    )
    .await
    .expect("room seed");
    let room_b = RoomRepo::create(
        pool,
        &CreateRoom {
            number: "E-302".to_string(),
        },
    )
    .await
    .expect("room seed");

    ScheduleFixture {
        record_id: record.id,
        other_record_id: other_record.id,
        room_a: room_a.id,
        room_b: room_b.id,
        prof_a: prof_a.user_id,
        prof_b: prof_b.user_id,
    }
}

fn meeting_body(
    room_id: DbId,
    professor_id: DbId,
    day: i16,
    start: &str,
    end: &str,
) -> serde_json::Value {
    serde_json::json!({
        "room_id": room_id,
        "professor_id": professor_id,
        "day": day,
        "start_time": start,
        "end_time": end,
    })
}

async fn create_meeting(
    app: Router,
    token: &str,
    record_id: DbId,
    body: serde_json::Value,
) -> axum::response::Response {
    post_json_auth(
        app,
        &format!("/api/v1/records/{record_id}/meetings"),
        body,
        token,
    )
    .await
}

// ---------------------------------------------------------------------------
// Creation and conflicts
// ---------------------------------------------------------------------------

/// A meeting on a free slot is created with 201.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_meeting(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "09:30:00");
    let response = create_meeting(app, &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["record_id"], fx.record_id);
    assert_eq!(json["room_id"], fx.room_a);
    assert_eq!(json["day"], 1);
}

/// Two meetings in the same room overlapping on the same day conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_conflict(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Different professor and record, same room and overlapping window.
    let body = meeting_body(fx.room_a, fx.prof_b, 1, "09:00:00", "11:00:00");
    let response = create_meeting(app, &token, fx.other_record_id, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "SCHEDULE_CONFLICT");
    let message = json["error"].as_str().expect("conflict message");
    assert!(
        message.contains("room schedule"),
        "expected room conflict message, got: {message}"
    );
}

/// Back-to-back meetings (end of one equals start of the next) do not
/// conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_adjacent_meetings_allowed(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 2, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = meeting_body(fx.room_a, fx.prof_a, 2, "10:00:00", "12:00:00");
    let response = create_meeting(app, &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Identical times on a different day do not conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_different_day_allowed(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = meeting_body(fx.room_a, fx.prof_a, 3, "08:00:00", "10:00:00");
    let response = create_meeting(app, &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// The same instructor cannot teach in two rooms at once.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_instructor_conflict(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Different room, same professor.
    let body = meeting_body(fx.room_b, fx.prof_a, 1, "09:00:00", "11:00:00");
    let response = create_meeting(app, &token, fx.other_record_id, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let message = body_json(response).await["error"]
        .as_str()
        .expect("conflict message")
        .to_string();
    assert!(
        message.contains("instructor schedule"),
        "expected instructor conflict message, got: {message}"
    );
}

/// When both room and instructor clash, the combined conflict is reported.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_and_instructor_conflict(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same room AND same professor.
    let body = meeting_body(fx.room_a, fx.prof_a, 1, "09:00:00", "11:00:00");
    let response = create_meeting(app, &token, fx.other_record_id, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let message = body_json(response).await["error"]
        .as_str()
        .expect("conflict message")
        .to_string();
    assert!(
        message.contains("room schedule") && message.contains("instructor schedule"),
        "expected combined conflict message, got: {message}"
    );
}

/// start_time must precede end_time.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_inverted_times_rejected(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "10:00:00", "08:00:00");
    let response = create_meeting(app, &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Day must be within 1..=7.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_day_rejected(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 8, "08:00:00", "10:00:00");
    let response = create_meeting(app, &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// A meeting does not conflict with itself: re-submitting its own slot on
/// update succeeds.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_excludes_self(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    let meeting_id = body_json(response).await["id"].as_i64().expect("meeting id");

    let body = serde_json::json!({ "start_time": "08:00:00", "end_time": "10:00:00" });
    let response = put_json_auth(
        app,
        &format!("/api/v1/meetings/{meeting_id}"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Moving a meeting onto another meeting's slot is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_onto_occupied_slot(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = meeting_body(fx.room_b, fx.prof_b, 1, "13:00:00", "15:00:00");
    let response = create_meeting(app.clone(), &token, fx.other_record_id, body).await;
    let meeting_id = body_json(response).await["id"].as_i64().expect("meeting id");

    // Shift the second meeting into the first one's room and window.
    let body = serde_json::json!({ "room_id": fx.room_a, "start_time": "09:00:00", "end_time": "11:00:00" });
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/meetings/{meeting_id}"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The meeting is untouched after the failed update.
    let response = get_auth(app, &format!("/api/v1/meetings/{meeting_id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["room_id"], fx.room_b);
    assert_eq!(json["start_time"], "13:00:00");
}

/// Updating a nonexistent meeting returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_meeting(pool: PgPool) {
    seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = serde_json::json!({ "day": 2 });
    let response = put_json_auth(app, "/api/v1/meetings/999999", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Deleting a meeting frees its slot.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_frees_slot(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    let meeting_id = body_json(response).await["id"].as_i64().expect("meeting id");

    let response = delete_auth(app.clone(), &format!("/api/v1/meetings/{meeting_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app, &token, fx.other_record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Dry-run validation
// ---------------------------------------------------------------------------

/// A draft missing fields is reported valid (nothing to check yet).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_validate_incomplete_draft(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = serde_json::json!({ "room_id": fx.room_a, "day": 1 });
    let response = post_json_auth(app, "/api/v1/meetings/validate", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["valid"], true);
    assert!(json.get("conflict").is_none());
}

/// A complete draft that clashes with an existing meeting is reported
/// invalid, with the conflict message, but nothing is written.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_validate_conflicting_draft(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = serde_json::json!({
        "room_id": fx.room_a,
        "professor_id": fx.prof_b,
        "day": 1,
        "start_time": "09:00:00",
        "end_time": "11:00:00",
    });
    let response = post_json_auth(app.clone(), "/api/v1/meetings/validate", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["valid"], false);
    let message = json["conflict"].as_str().expect("conflict message");
    assert!(message.contains("room schedule"));

    // Dry run only: the slot is still free for a real write elsewhere.
    let body = meeting_body(fx.room_b, fx.prof_b, 1, "09:00:00", "11:00:00");
    let response = create_meeting(app, &token, fx.other_record_id, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Passing exclude_id makes a draft skip its own persisted row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_validate_with_exclusion(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = meeting_body(fx.room_a, fx.prof_a, 1, "08:00:00", "10:00:00");
    let response = create_meeting(app.clone(), &token, fx.record_id, body).await;
    let meeting_id = body_json(response).await["id"].as_i64().expect("meeting id");

    let body = serde_json::json!({
        "room_id": fx.room_a,
        "professor_id": fx.prof_a,
        "day": 1,
        "start_time": "08:00:00",
        "end_time": "10:00:00",
        "exclude_id": meeting_id,
    });
    let response = post_json_auth(app, "/api/v1/meetings/validate", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["valid"], true);
}

/// The validate endpoint rejects out-of-range days.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_validate_invalid_day(pool: PgPool) {
    let fx = seed_schedule(&pool).await;
    let app = common::build_test_app(pool.clone());
    let token = common::auth_token(&pool, app.clone(), "sched_staff", ROLE_STAFF).await;

    let body = serde_json::json!({ "room_id": fx.room_a, "day": 0 });
    let response = post_json_auth(app, "/api/v1/meetings/validate", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
