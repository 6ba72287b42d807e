#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use starwars_api::config::{CorsOrigins, ServerConfig};
use starwars_api::router::{build_app, App};
use starwars_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout, with the admin browser mounted.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".parse().unwrap()]),
        request_timeout_secs: 30,
        admin_enabled: true,
    }
}

/// Build the full application with all middleware layers, using the given
/// database pool.
///
/// Goes through the same [`build_app`] as `main.rs` so integration tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery, trailing-slash normalization).
pub fn build_test_app(pool: PgPool) -> App {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> App {
    build_app(AppState {
        pool,
        config: Arc::new(config),
    })
}

/// Send a GET request.
pub async fn get(app: App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request without a body.
pub async fn post_empty(app: App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn luke() -> serde_json::Value {
    serde_json::json!({
        "name": "Luke",
        "last_name": "Skywalker",
        "race": "Human",
        "native_planet": "Tatooine",
        "is_jedi": true,
    })
}

pub fn leia_user() -> serde_json::Value {
    serde_json::json!({
        "email": "leia@alderaan.gov",
        "password": "help-me-obi-wan",
        "is_active": true,
        "sub_date": 1_700_000_000,
        "name": "Leia",
        "last_name": "Organa",
    })
}

/// POST a JSON body and return the created row's `id`.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await["id"].as_i64().unwrap()
}
