//! Handler for the static option catalogs.

use axum::Json;
use volantines_core::catalog::{catalogs, Catalogs};

use crate::response::Envelope;

/// GET /api/options
///
/// Never touches the store.
pub async fn list() -> Json<Envelope<Catalogs>> {
    Json(Envelope::ok(catalogs()))
}
