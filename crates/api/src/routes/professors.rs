//! Route definitions for the `/professors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::professors;
use crate::state::AppState;

/// Routes mounted at `/professors`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// GET    /{user_id}  -> get_by_id
/// PUT    /{user_id}  -> update
/// DELETE /{user_id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(professors::list).post(professors::create))
        .route(
            "/{user_id}",
            get(professors::get_by_id)
                .put(professors::update)
                .delete(professors::delete),
        )
}
