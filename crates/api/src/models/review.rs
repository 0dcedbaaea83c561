//! Customer review domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bistro_core::ReviewId;

/// A customer review. Read-only: no mutation contract is exposed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review ID.
    pub id: ReviewId,
    /// Reviewer display name.
    pub name: String,
    /// Review text.
    pub details: String,
    /// Star rating.
    pub rating: i32,
    /// When the review was left.
    pub created_at: DateTime<Utc>,
}
