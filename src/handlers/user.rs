use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::policy;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

/// Deletes a user and everything they own. Admin only, and never yourself.
pub async fn delete_user(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    // A token can outlive its account. Make sure the requester still exists
    // before honoring anything it claims.
    if state.users.find_by_id(user.id).await?.is_none() {
        return Err(ApiError::Unauthorized("Invalid token".to_string()));
    }

    policy::can_delete_user(&user, id)?;

    if state.users.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    // Recipes reference their creator, so they go first. Two sequential
    // calls, not a transaction: a crash in between leaves the user intact
    // with their recipes already gone, which a retry cleans up.
    let removed = state.recipes.delete_by_creator(id).await?;
    state.users.delete_user(id).await?;

    tracing::info!("Deleted user {} and {} of their recipes", id, removed);

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "User deleted successfully" })),
    ))
}
