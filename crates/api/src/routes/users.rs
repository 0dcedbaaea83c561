//! User route handlers: registration, listing, deletion, promotion, and the
//! admin status check.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bistro_core::{Email, Role, UserId};

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::auth::{RequireAdmin, RequireAuth};
use crate::models::{DeleteResult, UpdateResult, User};
use crate::state::AppState;

/// Self-registration request body. Anything beyond the email is ignored.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Email,
}

/// Registration result; `insertedId` is null when the email already existed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub inserted_id: Option<UserId>,
}

/// Admin status check result.
#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub admin: bool,
}

/// List every registered user (admin only).
#[instrument(skip(_admin, state))]
pub async fn index(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Check whether an email holds the admin role.
///
/// A caller may only query their own email; anything else is Forbidden. An
/// unregistered email reports `admin: false` rather than an error.
#[instrument(skip(user, state))]
pub async fn check_admin(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>> {
    let email = Email::parse(&email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    if email != user.email {
        return Err(AppError::Forbidden(format!(
            "{} may only query their own admin status",
            user.email
        )));
    }

    let role = UserRepository::new(state.pool()).role_for(&email).await?;

    Ok(Json(AdminStatus {
        admin: role.is_some_and(Role::is_admin),
    }))
}

/// Idempotent self-registration.
///
/// A repeat registration (including a concurrent duplicate) is a no-op that
/// reports a null `insertedId`; the store never gains a second record for
/// the same email.
#[instrument(skip(state), fields(email = %request.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    let inserted_id = UserRepository::new(state.pool())
        .create_if_absent(&request.email)
        .await?;

    let message = if inserted_id.is_some() {
        "user created"
    } else {
        "user already exists"
    };

    Ok(Json(RegisterResponse {
        message: message.to_string(),
        inserted_id,
    }))
}

/// Delete a user by ID (admin only).
#[instrument(skip(_admin, state))]
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResult>> {
    let deleted_count = UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;

    Ok(Json(DeleteResult { deleted_count }))
}

/// Promote a user to admin by ID (admin only).
///
/// The change is visible to the authorization gate on the promoted user's
/// very next request.
#[instrument(skip(_admin, state))]
pub async fn promote(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UpdateResult>> {
    let rows = UserRepository::new(state.pool())
        .promote_to_admin(UserId::new(id))
        .await?;

    Ok(Json(UpdateResult::from_rows_affected(rows)))
}
