//! Route definitions for the `/curricula` resource and its course entries.

use axum::routing::get;
use axum::Router;

use crate::handlers::curricula;
use crate::state::AppState;

/// Routes mounted at `/curricula`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /{id}/courses              -> list_courses
/// POST   /{id}/courses              -> add_course
/// PUT    /{id}/courses/{entry_id}   -> update_entry
/// DELETE /{id}/courses/{entry_id}   -> remove_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(curricula::list).post(curricula::create))
        .route(
            "/{id}",
            get(curricula::get_by_id)
                .put(curricula::update)
                .delete(curricula::delete),
        )
        .route(
            "/{id}/courses",
            get(curricula::list_courses).post(curricula::add_course),
        )
        .route(
            "/{id}/courses/{entry_id}",
            axum::routing::put(curricula::update_entry).delete(curricula::remove_entry),
        )
}
