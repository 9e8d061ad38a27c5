//! Handler for the root status route.

use axum::extract::State;
use axum::Json;

use crate::response::{Envelope, ServiceStatus};
use crate::state::AppState;

/// GET /
///
/// Greets the caller and reports whether the kite store answers. Always
/// 200; an unreachable store shows up as `store_reachable: false`.
pub async fn root(State(state): State<AppState>) -> Json<Envelope<ServiceStatus>> {
    let store_reachable = match volantines_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Kite store unreachable");
            false
        }
    };

    Json(Envelope::ok(ServiceStatus {
        message: "Hello, World!",
        version: env!("CARGO_PKG_VERSION"),
        store_reachable,
    }))
}
