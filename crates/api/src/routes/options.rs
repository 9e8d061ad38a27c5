use axum::routing::get;
use axum::Router;

use crate::handlers::options;
use crate::state::AppState;

/// `GET /options` -> static catalogs.
pub fn router() -> Router<AppState> {
    Router::new().route("/options", get(options::list))
}
