pub mod kite;
pub mod options;
pub mod status;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /kites                 list, create
/// /kites/{id}            get, update, soft delete
/// /options               design / thread / color catalogs
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(kite::router())
        .merge(options::router())
}
