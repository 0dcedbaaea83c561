//! Menu route handlers.
//!
//! Reads are public; every mutation sits behind the auth + admin gate.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use bistro_core::MenuItemId;

use crate::db::MenuRepository;
use crate::error::Result;
use crate::middleware::auth::RequireAdmin;
use crate::models::{DeleteResult, InsertResult, MenuItem, MenuItemInput, UpdateResult};
use crate::state::AppState;

/// List the full catalog (public).
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>> {
    let items = MenuRepository::new(state.pool()).list().await?;
    Ok(Json(items))
}

/// Fetch a single item (public).
///
/// An absent ID returns JSON `null`, not an error.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Option<MenuItem>>> {
    let item = MenuRepository::new(state.pool())
        .get(MenuItemId::new(id))
        .await?;

    Ok(Json(item))
}

/// Create a catalog item (admin only).
#[instrument(skip(_admin, state, input), fields(name = %input.name))]
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<MenuItemInput>,
) -> Result<Json<InsertResult<MenuItemId>>> {
    let inserted_id = MenuRepository::new(state.pool()).create(&input).await?;

    Ok(Json(InsertResult { inserted_id }))
}

/// Replace an item's fields (admin only).
///
/// Gated exactly like create and delete; an absent ID reports zero matched
/// rows instead of creating one.
#[instrument(skip(_admin, state, input))]
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<MenuItemInput>,
) -> Result<Json<UpdateResult>> {
    let rows = MenuRepository::new(state.pool())
        .update(MenuItemId::new(id), &input)
        .await?;

    Ok(Json(UpdateResult::from_rows_affected(rows)))
}

/// Delete an item (admin only).
///
/// Deleting an absent ID reports `deletedCount: 0`, not an error.
#[instrument(skip(_admin, state))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResult>> {
    let deleted_count = MenuRepository::new(state.pool())
        .delete(MenuItemId::new(id))
        .await?;

    Ok(Json(DeleteResult { deleted_count }))
}
