pub mod health;

use std::any::Any;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::AppError;
use crate::response::{responder, JsonEnvelope};

/// Build the application router with its middleware stack.
///
/// Unmatched routes answer with the `not_found` envelope.
pub fn app() -> Router {
    with_middleware(Router::new().merge(health::router()).fallback(fallback))
}

/// Wrap `router` in the middleware stack shared by every route.
///
/// Panicking handlers answer with the internal-error envelope.
pub fn with_middleware(router: Router) -> Router {
    let request_id_header = axum::http::HeaderName::from_static("x-request-id");

    router
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}

async fn fallback(uri: Uri) -> JsonEnvelope {
    tracing::debug!(%uri, "No route matched");
    responder().not_found().into()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalError(format!("Handler panicked: {detail}")).into_response()
}
