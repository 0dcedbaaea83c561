//! Cart entry domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bistro_core::{CartEntryId, Email, MenuItemId, Price};

/// A shopping cart entry (domain type).
///
/// Ownership is scoped by `email` only; nothing binds a request to the
/// cart it reads.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Unique entry ID.
    pub id: CartEntryId,
    /// Owner's email address.
    pub email: Email,
    /// Referenced catalog item.
    pub menu_item_id: MenuItemId,
    /// Item name at the time it was added.
    pub name: String,
    /// Item price at the time it was added.
    pub price: Price,
    /// When the entry was added.
    pub created_at: DateTime<Utc>,
}

/// Payload for adding a cart entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntryInput {
    pub email: Email,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub price: Price,
}
