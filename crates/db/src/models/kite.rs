//! Kite entity model and DTOs.
//!
//! Request DTOs accept the Spanish field names used by the original browser
//! client as serde aliases. Responses always use the English names.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use volantines_core::error::CoreError;
use volantines_core::kite::validate_required;
use volantines_core::types::{DbId, Timestamp};

/// A kite row from the `kites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Kite {
    pub id: DbId,
    pub name: String,
    pub design: String,
    pub size: String,
    pub thread_type: String,
    /// Ordered color values, stored as a JSON array.
    pub colors: Json<Vec<String>>,
    pub description: String,
    pub image_url: String,
    pub created_at: Timestamp,
    pub active: bool,
}

/// DTO for creating a new kite.
///
/// Required fields are `Option` so that a missing key reaches
/// [`CreateKite::validate`] instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateKite {
    #[serde(alias = "nombre")]
    pub name: Option<String>,
    #[serde(alias = "diseño")]
    pub design: Option<String>,
    #[serde(alias = "medida")]
    pub size: Option<String>,
    #[serde(alias = "tipo_hilo")]
    pub thread_type: Option<String>,
    /// Defaults to an empty list if omitted.
    #[serde(alias = "colores")]
    pub colors: Option<Vec<String>>,
    /// Defaults to an empty string if omitted.
    #[serde(alias = "descripcion")]
    pub description: Option<String>,
    /// Defaults to an empty string if omitted.
    #[serde(alias = "imagen_url")]
    pub image_url: Option<String>,
}

impl CreateKite {
    /// Reject the input if any required field is missing or empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required([
            self.name.as_deref(),
            self.design.as_deref(),
            self.size.as_deref(),
            self.thread_type.as_deref(),
        ])
    }
}

/// DTO for updating an existing kite. All fields are optional.
///
/// Absent and `null` fields leave the stored value unchanged. Unknown keys,
/// including `id`, `created_at` and `active`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateKite {
    #[serde(alias = "nombre")]
    pub name: Option<String>,
    #[serde(alias = "diseño")]
    pub design: Option<String>,
    #[serde(alias = "medida")]
    pub size: Option<String>,
    #[serde(alias = "tipo_hilo")]
    pub thread_type: Option<String>,
    #[serde(alias = "colores")]
    pub colors: Option<Vec<String>>,
    #[serde(alias = "descripcion")]
    pub description: Option<String>,
    #[serde(alias = "imagen_url")]
    pub image_url: Option<String>,
}
