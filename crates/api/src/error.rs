use axum::response::{IntoResponse, Response};
use envelope_core::{codes, items_from_validator, CoreError, Envelope, Payload};
use serde_json::Value;
use validator::ValidationErrors;

use crate::response::{responder, JsonEnvelope};

/// Application-level error type for HTTP handlers.
///
/// Each variant renders as the matching error envelope through the
/// installed responder.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested resource does not exist (404).
    #[error("Resource not found")]
    NotFound,

    /// The client is not authenticated (401).
    #[error("Authentication required")]
    Unauthenticated,

    /// The client lacks permission for the action (403).
    #[error("Permission denied")]
    Forbidden,

    /// A bad request with a human-readable message (400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Input rejected by `validator` (422).
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A failure from `envelope_core` helpers (500).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message (500).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The envelope this error is reported as. Internal details never leave
    /// the process; they are logged instead.
    pub fn into_envelope(self) -> Envelope {
        let r = responder();

        match self {
            AppError::NotFound => r.not_found(),
            AppError::Unauthenticated => r.unauthenticated(),
            AppError::Forbidden => r.unauthorized(),
            AppError::BadRequest(msg) => {
                r.error(Payload::SingleValue(Value::Null), Some(msg.as_str()))
            }
            AppError::Validation(errors) => r.validation_items(items_from_validator(&errors)),
            AppError::Core(err) => {
                tracing::error!(error = %err, "Internal core error");
                internal_error()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Envelope {
    Envelope::error(
        codes::INTERNAL_SERVER_ERROR,
        Payload::Empty,
        "An internal error occurred",
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        JsonEnvelope(self.into_envelope()).into_response()
    }
}
