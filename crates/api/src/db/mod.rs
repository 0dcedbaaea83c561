//! Database operations for the bistro `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `app_user` - Registered users and their roles (`email` is UNIQUE)
//! - `menu_item` - The restaurant catalog
//! - `cart_entry` - Shopping cart entries, scoped by owner email
//! - `review` - Customer reviews (read-only)
//!
//! # Migrations
//!
//! Migrations live in `crates/api/migrations/` and are embedded into the
//! binary with `sqlx::migrate!`; they run automatically at startup.

pub mod carts;
pub mod menu;
pub mod reviews;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use carts::CartRepository;
pub use menu::MenuRepository;
pub use reviews::ReviewRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
