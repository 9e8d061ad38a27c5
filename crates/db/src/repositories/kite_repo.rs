//! Repository for the `kites` table.
//!
//! Every read and write filters on `active = 1`, so a soft-deleted kite is
//! indistinguishable from one that never existed. Writes run inside a
//! transaction; returning early with `?` drops it uncommitted, which rolls
//! it back.

use sqlx::types::Json;
use sqlx::SqlitePool;
use volantines_core::types::DbId;

use crate::models::kite::{CreateKite, Kite, UpdateKite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, design, size, thread_type, colors, description, image_url, created_at, active";

/// Provides CRUD operations for kites.
pub struct KiteRepo;

impl KiteRepo {
    /// Insert a new active kite, returning the created row.
    ///
    /// Optional fields default to an empty list / empty string. The caller is
    /// expected to have run [`CreateKite::validate`]; a missing required field
    /// still fails here on the `NOT NULL` constraint.
    pub async fn create(pool: &SqlitePool, input: &CreateKite) -> Result<Kite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO kites
                (name, design, size, thread_type, colors, description, image_url, created_at, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 1)
             RETURNING {COLUMNS}"
        );
        let kite = sqlx::query_as::<_, Kite>(&query)
            .bind(&input.name)
            .bind(&input.design)
            .bind(&input.size)
            .bind(&input.thread_type)
            .bind(Json(input.colors.as_deref().unwrap_or_default()))
            .bind(input.description.as_deref().unwrap_or_default())
            .bind(input.image_url.as_deref().unwrap_or_default())
            .bind(chrono::Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(kite)
    }

    /// Find an active kite by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Kite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kites WHERE id = $1 AND active = 1");
        sqlx::query_as::<_, Kite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active kites ordered by ascending ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Kite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kites WHERE active = 1 ORDER BY id ASC");
        sqlx::query_as::<_, Kite>(&query).fetch_all(pool).await
    }

    /// Update an active kite. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateKite,
    ) -> Result<Option<Kite>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE kites SET
                name = COALESCE($2, name),
                design = COALESCE($3, design),
                size = COALESCE($4, size),
                thread_type = COALESCE($5, thread_type),
                colors = COALESCE($6, colors),
                description = COALESCE($7, description),
                image_url = COALESCE($8, image_url)
             WHERE id = $1 AND active = 1
             RETURNING {COLUMNS}"
        );
        let kite = sqlx::query_as::<_, Kite>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.design)
            .bind(&input.size)
            .bind(&input.thread_type)
            .bind(input.colors.as_deref().map(Json))
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(kite)
    }

    /// Soft-delete a kite by ID. Returns `true` if an active row was marked
    /// inactive; a second call for the same ID returns `false`.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("UPDATE kites SET active = 0 WHERE id = $1 AND active = 1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a kite by ID, including soft-deleted rows.
    ///
    /// Audit helper that skips the `active` filter. No HTTP route calls it;
    /// every request-facing lookup goes through [`KiteRepo::find_by_id`].
    pub async fn find_by_id_include_deleted(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Kite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kites WHERE id = $1");
        sqlx::query_as::<_, Kite>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
