//! Route definitions for the `/courses` resource and its links.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /                                -> list (supports ?q=)
/// POST   /                                -> create
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
/// GET    /{id}/prerequisites              -> list_prerequisites
/// PUT    /{id}/prerequisites/{other_id}   -> add_prerequisite
/// DELETE /{id}/prerequisites/{other_id}   -> remove_prerequisite
/// GET    /{id}/corequisites               -> list_corequisites
/// PUT    /{id}/corequisites/{other_id}    -> add_corequisite
/// DELETE /{id}/corequisites/{other_id}    -> remove_corequisite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list).post(courses::create))
        .route(
            "/{id}",
            get(courses::get_by_id)
                .put(courses::update)
                .delete(courses::delete),
        )
        .route("/{id}/prerequisites", get(courses::list_prerequisites))
        .route(
            "/{id}/prerequisites/{other_id}",
            put(courses::add_prerequisite).delete(courses::remove_prerequisite),
        )
        .route("/{id}/corequisites", get(courses::list_corequisites))
        .route(
            "/{id}/corequisites/{other_id}",
            put(courses::add_corequisite).delete(courses::remove_corequisite),
        )
}
