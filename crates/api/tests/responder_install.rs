//! The installed responder is process-wide, so this binary holds a single
//! test that installs a catalog and checks every consumer picks it up.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, render};
use envelope_api::error::AppError;
use envelope_api::response::{install_responder, responder};
use envelope_api::routes;
use envelope_core::{Messages, Responder};

#[tokio::test]
async fn installed_catalog_is_used_everywhere() {
    let messages =
        Messages::from_json_str(r#"{ "not_found": "Introuvable", "ok": "Bien" }"#).unwrap();
    assert!(install_responder(Responder::new(messages)));

    assert_eq!(responder().not_found().message(), "Introuvable");
    assert_eq!(
        responder().created(envelope_core::Payload::Empty).message(),
        "Item created successfully"
    );

    let (status, json) = render(AppError::NotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Introuvable");

    let json = body_json(get(routes::app(), "/health").await).await;
    assert_eq!(json["message"], "Bien");

    // A second installation is refused and the first catalog stays.
    assert!(!install_responder(Responder::default()));
    assert_eq!(responder().not_found().message(), "Introuvable");
}
