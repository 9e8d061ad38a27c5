//! Request extractors that report failures through [`AppError`].
//!
//! axum's stock `Path` and `Json` rejections render as plain text. These
//! wrappers convert them so every response, including malformed requests,
//! uses the JSON envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use volantines_core::kite::KITE_ENTITY;
use volantines_core::types::DbId;

use crate::error::AppError;

/// Kite id taken from the `{id}` path segment.
///
/// A segment that is not an integer matches no kite, so it is reported as
/// not found rather than as a bad request.
#[derive(Debug, Clone, Copy)]
pub struct KiteId(pub DbId);

impl<S> FromRequestParts<S> for KiteId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Unparseable kite id");
                AppError::NotFound(format!("{KITE_ENTITY} not found"))
            })?;
        Ok(KiteId(id))
    }
}

/// JSON request body whose rejection becomes a 400 envelope.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}
