//! Route definitions for the `/sections` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sections;
use crate::state::AppState;

/// Routes mounted at `/sections`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sections::list).post(sections::create))
        .route(
            "/{id}",
            get(sections::get_by_id)
                .put(sections::update)
                .delete(sections::delete),
        )
}
