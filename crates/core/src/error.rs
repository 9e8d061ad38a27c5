use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A fault outside the store, such as a handler panic. Store failures
    /// travel as `sqlx::Error` instead.
    #[error("Internal error: {0}")]
    Internal(String),
}
