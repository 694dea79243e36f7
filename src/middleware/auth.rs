use crate::error::ApiError;
use crate::models::user::TokenPayload;
use crate::state::AppState;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Represents an authenticated user extracted from the bearer token.
///
/// Use this as a handler parameter and Axum will automatically:
/// 1. Extract the Authorization header
/// 2. Verify the token through the injected TokenService
/// 3. Return the payload if valid, or 401 if not
pub struct AuthenticatedUser(pub TokenPayload);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing token".to_string()))?;

        // The original web client sends the token raw; newer clients send the
        // standard "Bearer <token>" form. Accept both.
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let payload = state
            .tokens
            .validate(token)
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedUser(payload))
    }
}
