use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// `GET /` -> greeting plus store reachability. Mounted at root, not under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(status::root))
}
