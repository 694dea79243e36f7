use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// Simple health check endpoint.
///
/// Used by load balancers and monitoring to know if the API is still alive.
/// We ping the identity store because if the database is down, nothing else
/// here works anyway.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = if state.users.ping().await.is_ok() {
        "Connected"
    } else {
        "Disconnected"
    };

    let response = HealthResponse {
        status: "Cookbook API is healthy!".to_string(),
        database: db_status.to_string(),
    };

    (StatusCode::OK, Json(response))
}
