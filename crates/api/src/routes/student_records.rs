//! Route definitions for standalone `/student-records` operations.
//!
//! Enrollment happens via `POST /records/{id}/students`; this router
//! covers grading and removal of individual rows.

use axum::routing::get;
use axum::Router;

use crate::handlers::student_records;
use crate::state::AppState;

/// Routes mounted at `/student-records`.
///
/// ```text
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update_grade
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(student_records::get_by_id)
            .put(student_records::update_grade)
            .delete(student_records::delete),
    )
}
