//! Menu catalog repository.

use sqlx::PgPool;

use bistro_core::MenuItemId;

use super::RepositoryError;
use crate::models::{MenuItem, MenuItemInput};

/// Repository for menu item database operations.
pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MenuRepository<'a> {
    /// Create a new menu repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let items = sqlx::query_as::<_, MenuItem>(
            "SELECT id, name, category, price, recipe, image, created_at \
             FROM menu_item ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Get a single item by ID; `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, RepositoryError> {
        let item = sqlx::query_as::<_, MenuItem>(
            "SELECT id, name, category, price, recipe, image, created_at \
             FROM menu_item WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// Insert a new catalog item, returning its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, input: &MenuItemInput) -> Result<MenuItemId, RepositoryError> {
        let (id,): (MenuItemId,) = sqlx::query_as(
            "INSERT INTO menu_item (name, category, price, recipe, image) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.price)
        .bind(&input.recipe)
        .bind(&input.image)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Replace an item's fields.
    ///
    /// Returns the number of rows matched (0 when the ID does not exist; no
    /// row is created).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: MenuItemId,
        input: &MenuItemInput,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE menu_item SET name = $1, category = $2, price = $3, recipe = $4, image = $5 \
             WHERE id = $6",
        )
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.price)
        .bind(&input.recipe)
        .bind(&input.image)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete an item by ID.
    ///
    /// Returns the number of rows removed (0 when absent, not an error).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: MenuItemId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM menu_item WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
