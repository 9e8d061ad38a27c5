//! Handlers for the `/kites` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use volantines_core::error::CoreError;
use volantines_core::kite::KITE_ENTITY;
use volantines_core::types::DbId;
use volantines_db::models::kite::{CreateKite, UpdateKite};
use volantines_db::repositories::KiteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, KiteId};
use crate::response::{Envelope, KiteBody, KiteList, Message};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KITE_ENTITY,
        id,
    })
}

/// POST /api/kites
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateKite>,
) -> AppResult<(StatusCode, Json<Envelope<KiteBody>>)> {
    if let Err(err) = input.validate() {
        tracing::debug!(error = %err, "Rejected kite create");
        return Err(err.into());
    }

    let kite = KiteRepo::create(&state.pool, &input).await?;
    tracing::info!(kite_id = kite.id, name = %kite.name, "Kite created");
    Ok((StatusCode::CREATED, Json(Envelope::ok(KiteBody { kite }))))
}

/// GET /api/kites
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<KiteList>>> {
    let kites = KiteRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(KiteList::from(kites))))
}

/// GET /api/kites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    KiteId(id): KiteId,
) -> AppResult<Json<Envelope<KiteBody>>> {
    let kite = KiteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(Envelope::ok(KiteBody { kite })))
}

/// PUT /api/kites/{id}
///
/// Partial update. Unlike create, supplied fields are not checked for
/// emptiness.
pub async fn update(
    State(state): State<AppState>,
    KiteId(id): KiteId,
    JsonBody(input): JsonBody<UpdateKite>,
) -> AppResult<Json<Envelope<KiteBody>>> {
    let kite = KiteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(kite_id = id, "Kite updated");
    Ok(Json(Envelope::ok(KiteBody { kite })))
}

/// DELETE /api/kites/{id}
///
/// Soft delete. A second call for the same id is a 404.
pub async fn delete(
    State(state): State<AppState>,
    KiteId(id): KiteId,
) -> AppResult<Json<Envelope<Message>>> {
    if !KiteRepo::soft_delete(&state.pool, id).await? {
        tracing::debug!(kite_id = id, "Delete of missing or inactive kite");
        return Err(not_found(id));
    }

    tracing::info!(kite_id = id, "Kite soft-deleted");
    Ok(Json(Envelope::ok(Message {
        message: format!("{KITE_ENTITY} {id} deleted"),
    })))
}
