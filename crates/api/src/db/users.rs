//! User repository for database operations.
//!
//! The users table backs both the credential store (who exists) and the
//! authorization signal (what role they hold).

use sqlx::PgPool;

use bistro_core::{Email, Role, UserId};

use super::RepositoryError;
use crate::models::User;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every registered user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, email, role, created_at FROM app_user ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Look up the stored role for an email.
    ///
    /// Returns `None` when no record exists. This runs on every admin-gated
    /// request and is never cached, so a role change takes effect on the
    /// very next call.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored role is not a
    /// known value.
    pub async fn role_for(&self, email: &Email) -> Result<Option<Role>, RepositoryError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT role FROM app_user WHERE email = $1")
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some((role,)) => {
                let role = role.parse::<Role>().map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
                })?;
                Ok(Some(role))
            }
            None => Ok(None),
        }
    }

    /// Insert a user with the default role unless the email already exists.
    ///
    /// The unique index on `email` plus `ON CONFLICT DO NOTHING` makes the
    /// idempotency atomic: concurrent duplicate registrations race on the
    /// index, not on a check-then-insert sequence. Returns `None` when the
    /// email is already registered.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create_if_absent(&self, email: &Email) -> Result<Option<UserId>, RepositoryError> {
        let row: Option<(UserId,)> = sqlx::query_as(
            "INSERT INTO app_user (email) VALUES ($1) ON CONFLICT (email) DO NOTHING RETURNING id",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|(id,)| id))
    }

    /// Delete a user by ID.
    ///
    /// Returns the number of rows removed (0 when the ID does not exist).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM app_user WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Set a user's role to admin.
    ///
    /// Unconditional: promoting an existing admin is a no-op that still
    /// reports one affected row. Returns 0 when the ID does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn promote_to_admin(&self, id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE app_user SET role = 'admin' WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
