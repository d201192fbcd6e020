//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{user_id}         -> get_by_id
/// PUT    /{user_id}         -> update
/// DELETE /{user_id}         -> delete
/// GET    /{user_id}/grades  -> list_grades
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(students::list).post(students::create))
        .route(
            "/{user_id}",
            get(students::get_by_id)
                .put(students::update)
                .delete(students::delete),
        )
        .route("/{user_id}/grades", get(students::list_grades))
}
