//! Route definitions for the `/programs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::programs;
use crate::state::AppState;

/// Routes mounted at `/programs`.
///
/// ```text
/// GET    /      -> list (supports ?department_id=)
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(programs::list).post(programs::create))
        .route(
            "/{id}",
            get(programs::get_by_id)
                .put(programs::update)
                .delete(programs::delete),
        )
}
