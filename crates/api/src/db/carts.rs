//! Shopping cart repository.

use sqlx::PgPool;

use bistro_core::{CartEntryId, Email};

use super::RepositoryError;
use crate::models::{CartEntry, CartEntryInput};

/// Repository for cart entry database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the entries owned by an email, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_email(&self, email: &Email) -> Result<Vec<CartEntry>, RepositoryError> {
        let entries = sqlx::query_as::<_, CartEntry>(
            "SELECT id, email, menu_item_id, name, price, created_at \
             FROM cart_entry WHERE email = $1 ORDER BY id",
        )
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Insert a new cart entry, returning its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn add(&self, input: &CartEntryInput) -> Result<CartEntryId, RepositoryError> {
        let (id,): (CartEntryId,) = sqlx::query_as(
            "INSERT INTO cart_entry (email, menu_item_id, name, price) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&input.email)
        .bind(input.menu_item_id)
        .bind(&input.name)
        .bind(input.price)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Delete an entry by ID.
    ///
    /// Returns the number of rows removed (0 when absent, not an error).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CartEntryId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_entry WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
