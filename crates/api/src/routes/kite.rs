//! Route definitions for the `/kites` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::kite;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /kites          -> list
/// POST   /kites          -> create
/// GET    /kites/{id}     -> get_by_id
/// PUT    /kites/{id}     -> update
/// DELETE /kites/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/kites", get(kite::list).post(kite::create))
        .route(
            "/kites/{id}",
            get(kite::get_by_id)
                .put(kite::update)
                .delete(kite::delete),
        )
}
