//! axum integration for response envelopes.
//!
//! Handlers return [`JsonEnvelope`] (or anything convertible into it) and the
//! envelope's `code` becomes the HTTP status of the response. The
//! process-wide [`Responder`] is installed once at start-up with
//! [`install_responder`]; until then [`responder`] serves the English catalog.

use std::sync::OnceLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use envelope_core::{Envelope, Messages, Responder};

static INSTALLED: OnceLock<Responder> = OnceLock::new();
static ENGLISH: Responder = Responder::new(Messages::ENGLISH);

/// Install the responder used by [`responder`] and by `AppError` responses.
///
/// Returns `false` (and keeps the current one) if a responder was already
/// installed.
pub fn install_responder(responder: Responder) -> bool {
    let installed = INSTALLED.set(responder).is_ok();
    if !installed {
        tracing::warn!("Responder already installed, keeping the existing message catalog");
    }
    installed
}

/// The installed responder, or the English default.
pub fn responder() -> &'static Responder {
    INSTALLED.get().unwrap_or(&ENGLISH)
}

/// An [`Envelope`] rendered as a JSON response with its own status code.
///
/// # Example
///
/// ```ignore
/// async fn get_item() -> JsonEnvelope {
///     responder().show(Payload::fields([("id", 7)])).into()
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonEnvelope(pub Envelope);

impl From<Envelope> for JsonEnvelope {
    fn from(envelope: Envelope) -> Self {
        Self(envelope)
    }
}

impl IntoResponse for JsonEnvelope {
    fn into_response(self) -> Response {
        let code = self.0.code();
        let status = StatusCode::from_u16(code).unwrap_or_else(|_| {
            tracing::warn!(code, "Envelope carries an invalid HTTP status code");
            StatusCode::INTERNAL_SERVER_ERROR
        });

        (status, Json(self.0)).into_response()
    }
}
