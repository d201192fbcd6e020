//! Route definitions for standalone `/meetings` operations.
//!
//! Meetings are created via `POST /records/{id}/meetings`; this router
//! covers lookup, update, delete, and the dry-run conflict check.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::meetings;
use crate::state::AppState;

/// Routes mounted at `/meetings`.
///
/// ```text
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (conflict-validated, excludes own row)
/// DELETE /{id}      -> delete
/// POST   /validate  -> validate (dry-run conflict check)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(meetings::get_by_id)
                .put(meetings::update)
                .delete(meetings::delete),
        )
        .route("/validate", post(meetings::validate))
}
