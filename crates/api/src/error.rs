//! HTTP error mapping.
//!
//! Handlers return [`AppResult`]; the `?` operator lifts [`CoreError`] and
//! `sqlx::Error` into [`AppError`], and `IntoResponse` turns every variant
//! into the `{ "error": ..., "code": ... }` JSON body the frontend expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use talentscope_core::error::CoreError;

/// Error type for everything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error; carries its own HTTP semantics.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, classified into a status at response time.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An unexpected failure in a dependency (hashing, token signing, ...).
    /// The message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status code, machine-readable code, and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// `RowNotFound` is a 404. A unique violation (PostgreSQL 23505) on one of
/// this schema's `uq_` constraints is a 409 naming the constraint; the
/// signup path relies on this for duplicate emails. Everything else is a
/// sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_variants_map_to_their_statuses() {
        let cases = [
            (
                AppError::Core(CoreError::Validation("bad input".into())),
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                AppError::Core(CoreError::Unauthorized("no token".into())),
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
            ),
            (
                AppError::Core(CoreError::Forbidden("disabled".into())),
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
            ),
            (
                AppError::Core(CoreError::NotFound {
                    entity: "user",
                    id: "7".into(),
                }),
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
            ),
        ];

        for (err, expected_status, expected_code) in cases {
            let (status, code, _) = err.parts();
            assert_eq!(status, expected_status);
            assert_eq!(code, expected_code);
        }
    }

    #[test]
    fn internal_error_message_is_not_leaked() {
        let err = AppError::InternalError("argon2 params rejected".into());
        let (status, _, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message.contains("argon2"));
    }

    #[test]
    fn row_not_found_is_404() {
        let (status, code, _) = classify_sqlx_error(&sqlx::Error::RowNotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }
}
