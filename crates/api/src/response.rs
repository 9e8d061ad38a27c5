//! Success envelope types for API handlers.
//!
//! Every response carries a top-level `success` flag. Payload keys sit next
//! to it rather than under a nested object, so a kite lookup renders as
//! `{ "success": true, "kite": { ... } }`. Failures are rendered by
//! [`AppError`](crate::error::AppError).

use serde::Serialize;
use volantines_db::models::kite::Kite;

/// `{ "success": true, ...payload }` response envelope.
///
/// `T` must serialize as a map; its keys are flattened into the envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap a payload in a successful envelope.
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// Single-kite payload: `{ "kite": ... }`.
#[derive(Debug, Serialize)]
pub struct KiteBody {
    pub kite: Kite,
}

/// List payload: `{ "kites": [...], "total": n }`.
#[derive(Debug, Serialize)]
pub struct KiteList {
    pub kites: Vec<Kite>,
    pub total: usize,
}

impl From<Vec<Kite>> for KiteList {
    fn from(kites: Vec<Kite>) -> Self {
        Self {
            total: kites.len(),
            kites,
        }
    }
}

/// Confirmation payload: `{ "message": ... }`.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// Root status payload: `{ "message": ..., "version": ..., "store_reachable": ... }`.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a trivial query against the kite store succeeded.
    pub store_reachable: bool,
}
