//! Domain error type shared across the workspace.

/// Domain-level errors raised by core logic and the handlers built on it.
///
/// The API layer maps these onto HTTP status codes; nothing in this crate
/// assumes an HTTP context. Storage-level failures (including uniqueness
/// conflicts) travel as `sqlx::Error` and are classified at the API boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Input failed domain validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}
