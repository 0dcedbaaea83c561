//! Cart route handlers.
//!
//! All three operations are public: entries are scoped by the email query
//! parameter with no ownership proof, so any caller can read any cart by
//! supplying its email. Kept as-is, it is the contract the frontend uses.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use bistro_core::{CartEntryId, Email};

use crate::db::CartRepository;
use crate::error::Result;
use crate::models::{CartEntry, CartEntryInput, DeleteResult, InsertResult};
use crate::state::AppState;

/// Query parameters for listing a cart.
#[derive(Debug, Deserialize)]
pub struct CartListQuery {
    pub email: Email,
}

/// List the entries owned by an email.
#[instrument(skip(state), fields(email = %query.email))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CartListQuery>,
) -> Result<Json<Vec<CartEntry>>> {
    let entries = CartRepository::new(state.pool())
        .list_for_email(&query.email)
        .await?;

    Ok(Json(entries))
}

/// Add a cart entry.
#[instrument(skip(state, input), fields(email = %input.email))]
pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<CartEntryInput>,
) -> Result<Json<InsertResult<CartEntryId>>> {
    let inserted_id = CartRepository::new(state.pool()).add(&input).await?;

    Ok(Json(InsertResult { inserted_id }))
}

/// Remove a cart entry by ID.
///
/// Removing an absent ID reports `deletedCount: 0`, not an error.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResult>> {
    let deleted_count = CartRepository::new(state.pool())
        .delete(CartEntryId::new(id))
        .await?;

    Ok(Json(DeleteResult { deleted_count }))
}
