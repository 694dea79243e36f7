use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::recipe::{CreateRecipeRequest, Recipe, UpdateRecipeRequest};
use crate::state::AppState;
use crate::utils::{policy, validation};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

/// Lists every recipe in the system.
///
/// No filtering, no sorting, no pagination — just returns everything.
/// Any valid token will do; recipes are readable by all logged-in users.
pub async fn list_recipes(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let recipes = state.recipes.list_recipes().await?;

    Ok((StatusCode::OK, Json(json!({ "recipes": recipes }))))
}

/// Creates a recipe owned by the caller.
///
/// The creator is always the authenticated user — you can't create recipes
/// under someone else's name.
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    body: Result<Json<CreateRecipeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let Json(payload) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let (title, description) = match (payload.title, payload.description) {
        (Some(t), Some(d)) => (t, d),
        _ => return Err(ApiError::Validation("Missing parameters".to_string())),
    };

    validation::validate_title(&title).map_err(ApiError::Validation)?;
    validation::validate_description(&description).map_err(ApiError::Validation)?;

    let now = chrono::Utc::now().timestamp_millis();

    let recipe = Recipe {
        id: Uuid::new_v4(),
        title,
        description,
        created_at: now,
        updated_at: now,
        creator_id: user.id,
    };

    state.recipes.create_recipe(&recipe).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Recipe created successfully",
            "recipe": recipe,
        })),
    ))
}

/// Edits a recipe's title and/or description.
///
/// NORMAL users may only edit their own recipes; admins may edit any.
pub async fn edit_recipe(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateRecipeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let Json(payload) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    if payload.title.is_none() && payload.description.is_none() {
        return Err(ApiError::Validation("Missing parameters".to_string()));
    }

    if let Some(title) = payload.title.as_deref() {
        validation::validate_title(title).map_err(ApiError::Validation)?;
    }
    if let Some(description) = payload.description.as_deref() {
        validation::validate_description(description).map_err(ApiError::Validation)?;
    }

    let mut recipe = state
        .recipes
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    policy::can_modify_recipe(&user, &recipe)?;

    if let Some(title) = payload.title {
        recipe.title = title;
    }
    if let Some(description) = payload.description {
        recipe.description = description;
    }

    // updated_at must move strictly forward even for sub-millisecond edits.
    recipe.updated_at = chrono::Utc::now()
        .timestamp_millis()
        .max(recipe.updated_at + 1);

    let updated = state.recipes.update_recipe(&recipe).await?;
    if !updated {
        return Err(ApiError::NotFound("Recipe not found".to_string()));
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Recipe updated successfully",
            "recipe": recipe,
        })),
    ))
}

/// Deletes a recipe.
///
/// Same ownership rule as editing: owners and admins.
pub async fn delete_recipe(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let recipe = state
        .recipes
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    policy::can_modify_recipe(&user, &recipe)?;

    let deleted = state.recipes.delete_recipe(id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Recipe not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Recipe deleted successfully" })),
    ))
}
