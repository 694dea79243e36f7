use crate::handlers::{
    auth::{login, signup},
    health::health_check,
    recipe::{create_recipe, delete_recipe, edit_recipe, list_recipes},
    user::delete_user,
};
use crate::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    handler::Handler,
    routing::{delete, get, post, put},
};
use tower_governor::GovernorLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Rate limit configurations
    let login_conf = rate_limit::create_login_config();
    let signup_conf = rate_limit::create_signup_config();

    // Paths are the contract the existing web client was written against,
    // /createrecipe included.
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/signup",
            post(signup.layer(GovernorLayer::new(signup_conf))),
        )
        .route("/login", post(login.layer(GovernorLayer::new(login_conf))))
        .route("/recipes", get(list_recipes))
        .route("/createrecipe", post(create_recipe))
        .route("/recipes/{id}", put(edit_recipe))
        .route("/recipes/{id}", delete(delete_recipe))
        .route("/users/{id}", delete(delete_user))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
