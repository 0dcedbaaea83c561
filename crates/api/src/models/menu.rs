//! Menu item domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bistro_core::{MenuItemId, Price};

/// A catalog item (domain type).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique item ID.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Menu section (e.g. "salad", "dessert").
    pub category: String,
    /// Price in the billing currency.
    pub price: Price,
    /// Short recipe / description text.
    pub recipe: String,
    /// Image URL.
    pub image: String,
    /// When the item was added to the catalog.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a menu item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub recipe: String,
    pub image: String,
}
