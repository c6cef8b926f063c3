use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Send a GET request to `uri` through the router.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Render anything implementing `IntoResponse` into its status and JSON body.
#[allow(dead_code)]
pub async fn render(value: impl IntoResponse) -> (StatusCode, serde_json::Value) {
    let response = value.into_response();
    let status = response.status();
    (status, body_json(response).await)
}
