//! Review route handlers (public, read-only).

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::ReviewRepository;
use crate::error::Result;
use crate::models::Review;
use crate::state::AppState;

/// List every customer review.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Review>>> {
    let reviews = ReviewRepository::new(state.pool()).list().await?;
    Ok(Json(reviews))
}
