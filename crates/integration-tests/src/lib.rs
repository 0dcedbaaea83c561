//! Integration tests for the bistro backend.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL, then the API server
//! cargo run -p bistro-api
//!
//! # Run the end-to-end tests (ignored by default)
//! cargo test -p bistro-integration-tests -- --ignored
//! ```
//!
//! The tests drive the HTTP surface with a cookie-holding client; fixtures
//! that cannot be created through the public API (the first admin) are
//! seeded directly over sqlx.
//!
//! # Environment
//!
//! - `BISTRO_BASE_URL` - API base URL (default: <http://localhost:9000>)
//! - `BISTRO_DATABASE_URL` / `DATABASE_URL` - database for fixture seeding

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use sqlx::PgPool;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("BISTRO_BASE_URL").unwrap_or_else(|_| "http://localhost:9000".to_string())
}

/// Create an HTTP client with a cookie store, so the session cookie set by
/// `POST /jwt` rides along on subsequent requests.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a unique test email.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@test.invalid", uuid::Uuid::new_v4().simple())
}

/// Register a user through the public endpoint, returning the response body.
///
/// # Panics
///
/// Panics if the request fails or returns a non-JSON body.
pub async fn register(client: &Client, email: &str) -> serde_json::Value {
    let response = client
        .post(format!("{}/users", api_base_url()))
        .json(&serde_json::json!({ "email": email }))
        .send()
        .await
        .expect("Failed to call POST /users");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse response")
}

/// Log in: `POST /jwt` stores the session cookie on the client.
///
/// # Panics
///
/// Panics if the request fails.
pub async fn login(client: &Client, email: &str) {
    let response = client
        .post(format!("{}/jwt", api_base_url()))
        .json(&serde_json::json!({ "email": email }))
        .send()
        .await
        .expect("Failed to call POST /jwt");

    assert!(response.status().is_success());
}

/// Connect directly to the database for fixture seeding.
///
/// # Panics
///
/// Panics if no database URL is configured or the connection fails.
pub async fn db_pool() -> PgPool {
    let url = std::env::var("BISTRO_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("BISTRO_DATABASE_URL must be set for integration tests");

    PgPool::connect(&url)
        .await
        .expect("Failed to connect to database")
}

/// Seed helper: force a user's role to admin directly in the database.
///
/// The first admin cannot be created through the public API (promotion is
/// itself admin-gated), so tests bootstrap one here.
///
/// # Panics
///
/// Panics if the update fails.
pub async fn make_admin(pool: &PgPool, email: &str) {
    sqlx::query("UPDATE app_user SET role = 'admin' WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await
        .expect("Failed to seed admin role");
}
