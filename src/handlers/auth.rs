use crate::error::ApiError;
use crate::models::user::{AuthResponse, LoginRequest, Role, SignupRequest, User};
use crate::state::AppState;
use crate::utils::auth::{hash_password, verify_password};
use crate::utils::validation;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

/// Registers a new account and returns a token for it.
///
/// The role is always NORMAL here — there is no way to sign up as an admin.
/// Admin accounts come from the startup bootstrap.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let Json(payload) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let (nickname, email, password) = match (payload.nickname, payload.email, payload.password) {
        (Some(n), Some(e), Some(p)) => (n, e, p),
        _ => return Err(ApiError::Validation("Missing parameters".to_string())),
    };

    validation::validate_nickname(&nickname).map_err(ApiError::Validation)?;
    validation::validate_password(&password).map_err(ApiError::Validation)?;
    validation::validate_email(&email).map_err(ApiError::Validation)?;

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = hash_password(&password)?;

    let user = User {
        id: Uuid::new_v4(),
        nickname,
        email,
        password_hash,
        role: Role::Normal,
        created_at: chrono::Utc::now().timestamp_millis(),
    };

    state.users.create_user(&user).await?;

    let token = state.tokens.issue(user.id, user.role)?;

    tracing::info!("New user registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(json!(AuthResponse {
            message: "Signup successful".to_string(),
            token,
        })),
    ))
}

/// Exchanges email + password for a token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let Json(payload) = body.map_err(|e| ApiError::Validation(e.body_text()))?;

    let (email, password) = match (payload.email, payload.password) {
        (Some(e), Some(p)) => (e, p),
        _ => {
            return Err(ApiError::Unauthorized(
                "Missing email or password".to_string(),
            ));
        }
    };

    validation::validate_password(&password).map_err(ApiError::Validation)?;
    validation::validate_email(&email).map_err(ApiError::Validation)?;

    // Same message for unknown email and wrong password, so login responses
    // don't reveal which emails are registered.
    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.tokens.issue(user.id, user.role)?;

    Ok((
        StatusCode::OK,
        Json(json!(AuthResponse {
            message: "Login successful".to_string(),
            token,
        })),
    ))
}
