//! Common test utilities
//!
//! Stands the full application up over an in-memory SQLite store so the
//! integration suite needs no external services. A single pooled
//! connection keeps the in-memory database alive and shared across the
//! whole test.

#![allow(dead_code)]

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use ripple::server::config::AppConfig;
use ripple::server::init::create_app;

/// Signing secret used by every test app.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// A running application plus a pool handle for direct fixtures.
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

/// Build the application over a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        port: 0,
    };

    let server = TestServer::new(create_app(config, pool.clone()))
        .expect("Failed to start test server");

    TestApp { server, pool }
}

/// Register a user through the API; returns the bearer token and the
/// public user object from the response.
pub async fn register_user(
    app: &TestApp,
    username: &str,
    email: &str,
    password: &str,
) -> (String, serde_json::Value) {
    let response = app
        .server
        .post("/api/auth/register")
        .json(&serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().expect("token in response").to_string();
    (token, body["user"].clone())
}

/// Build the Authorization header value for a token.
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value")
}

/// Create a post through the API; returns the post object.
pub async fn create_post(app: &TestApp, token: &str, content: &str) -> serde_json::Value {
    let response = app
        .server
        .post("/api/posts")
        .add_header(AUTHORIZATION, bearer(token))
        .json(&serde_json::json!({ "content": content }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    body["post"].clone()
}
