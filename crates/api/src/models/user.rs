//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bistro_core::{Email, Role, UserId};

/// A registered user (domain type).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique).
    pub email: Email,
    /// Privilege role; the sole authorization signal.
    pub role: Role,
    /// When the user first registered.
    pub created_at: DateTime<Utc>,
}

/// Verified identity extracted from the session token.
///
/// Carries only the email: privilege is never trusted from the token and is
/// re-derived from the users table per request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Email the token was issued for.
    pub email: Email,
}
