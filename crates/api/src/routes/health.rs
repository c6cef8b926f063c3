use axum::{routing::get, Router};
use envelope_core::Payload;

use crate::response::{responder, JsonEnvelope};

/// GET /health -- service status merged into an `OK` envelope.
async fn health_check() -> JsonEnvelope {
    responder()
        .show(Payload::fields([
            ("service", "ok"),
            ("version", env!("CARGO_PKG_VERSION")),
        ]))
        .into()
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
