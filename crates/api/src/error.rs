use agenda_core::error::CoreError;
use agenda_core::validation::FieldErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `agenda_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Request-body validation failed; carries the per-field error map.
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => error_body(
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    error_body(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
                }
                CoreError::Conflict(msg) => error_body(StatusCode::CONFLICT, "CONFLICT", msg),
                CoreError::Unauthorized(msg) => {
                    error_body(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
                }
                CoreError::Forbidden(msg) => error_body(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    error_body(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred",
                    )
                }
            },

            // Validation errors carry structure beyond (status, code, message):
            // the field-keyed map goes out under "fields" so clients can
            // attach messages to inputs.
            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                }),
            ),

            // --- Database errors ---
            AppError::Database(err) => {
                let (status, code, message) = classify_sqlx_error(err);
                error_body(status, code, message)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred",
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn error_body(
    status: StatusCode,
    code: &'static str,
    message: impl AsRef<str>,
) -> (StatusCode, serde_json::Value) {
    (
        status,
        json!({
            "error": message.as_ref(),
            "code": code,
        }),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409. The handlers pre-check uniqueness and report it as a validation
///   error; this path closes the race between check and insert.
/// - Foreign key violations map to 409 (a referenced row vanished between
///   the handler's ownership check and the write).
/// - Check constraint violations (`ck_`) map to 500: the handlers validate
///   first, so a tripped check means a write path skipped validation.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                // PostgreSQL unique constraint violation.
                Some("23505") if constraint.starts_with("uq_") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
                // Foreign key violation.
                Some("23503") => {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Operation violates foreign key constraint: {constraint}"),
                    );
                }
                // Check constraint violation.
                Some("23514") if constraint.starts_with("ck_") => {
                    tracing::error!(constraint, "Check constraint violated past validation");
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INVARIANT_VIOLATION",
                        "An internal error occurred".to_string(),
                    );
                }
                _ => {}
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
