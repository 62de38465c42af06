#![allow(dead_code)]

use std::path::PathBuf;

use akkhara_core::registry::Registry;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use akkhara_api::config::ServerConfig;
use akkhara_api::router::build_app_router;
use akkhara_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows any CORS origin (matching the dev default) and points the index
/// template at a path that does not exist, so the built-in page is served.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        index_template: PathBuf::from("/nonexistent/akkhara/index.html"),
    }
}

/// Build the full application router with the standard registry.
pub fn build_test_app() -> Router {
    build_test_app_with_config(test_config())
}

/// Build the full application router with a custom configuration.
pub fn build_test_app_with_config(config: ServerConfig) -> Router {
    let state = AppState::new(config.clone(), Registry::standard());
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    post_raw(app, uri, json.to_string()).await
}

/// POST a conversion request to `/process`.
pub async fn process(app: Router, text: &str, input: &str, output: &str) -> Response {
    post_json(
        app,
        "/process",
        serde_json::json!({
            "text": text,
            "inputSelection": input,
            "outputSelection": output,
        }),
    )
    .await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
