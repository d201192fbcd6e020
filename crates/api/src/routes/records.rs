//! Route definitions for the `/records` resource and its nested
//! meetings and student enrollments.

use axum::routing::get;
use axum::Router;

use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET    /               -> list (supports year/term/advisor/section filters)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete (cascades to meetings + student records)
/// GET    /{id}/meetings  -> list_meetings
/// POST   /{id}/meetings  -> create_meeting (conflict-validated)
/// GET    /{id}/students  -> list_students
/// POST   /{id}/students  -> enroll_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(records::list).post(records::create))
        .route(
            "/{id}",
            get(records::get_by_id)
                .put(records::update)
                .delete(records::delete),
        )
        .route(
            "/{id}/meetings",
            get(records::list_meetings).post(records::create_meeting),
        )
        .route(
            "/{id}/students",
            get(records::list_students).post(records::enroll_student),
        )
}
