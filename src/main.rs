use cookbook::models::user::{Role, User};
use cookbook::state::AppState;
use cookbook::store::postgres::{PgIdentityStore, PgRecipeStore};
use cookbook::store::{DynIdentityStore, DynRecipeStore};
use cookbook::utils::auth::hash_password;
use cookbook::utils::jwt::TokenService;
use cookbook::{db, routes};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 0. Load .env file immediately
    // Uses dotenvy which is just dotenv but maintained. Silently ignores if no .env exists.
    dotenvy::dotenv().ok();

    // 1. Initialize Sentry (if configured)
    // This guard must be kept in scope for Sentry to work
    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").ok(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            send_default_pii: true,
            traces_sample_rate: 1.0,
            ..Default::default()
        },
    ));

    // 2. Install rustls crypto provider
    // This needs to happen before any TLS connections are made (database, etc).
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // 3. Initialize logging
    // Uses tracing for structured logs. Respects RUST_LOG env var.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cookbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    tracing::info!("Starting Cookbook API...");

    // 4. Connect to database and set up the stores
    let pool = db::connect().await?;
    tracing::info!("Connected to PostgreSQL");

    let users: DynIdentityStore = Arc::new(PgIdentityStore::new(pool.clone()));
    let recipes: DynRecipeStore = Arc::new(PgRecipeStore::new(pool));

    // 5. Token service, built once from the secret
    let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let tokens = Arc::new(TokenService::new(secret));

    // 6. Admin bootstrap
    // Signup only ever creates NORMAL users, so the first admin has to come
    // from somewhere. If ADMIN_EMAIL/ADMIN_PASSWORD are set and that account
    // doesn't exist yet, create it.
    bootstrap_admin(&users).await?;

    // 7. Build the app state and start the server
    let state = AppState {
        users,
        recipes,
        tokens,
    };
    let app = routes::create_routes(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = SocketAddr::from(([0, 0, 0, 0], port.parse()?));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn bootstrap_admin(users: &DynIdentityStore) -> anyhow::Result<()> {
    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        return Ok(());
    };

    if users.find_by_email(&email).await?.is_some() {
        return Ok(());
    }

    let admin = User {
        id: Uuid::new_v4(),
        nickname: "admin".to_string(),
        email,
        password_hash: hash_password(&password)?,
        role: Role::Admin,
        created_at: chrono::Utc::now().timestamp_millis(),
    };

    users.create_user(&admin).await?;
    tracing::info!("Admin account created for {}", admin.email);

    Ok(())
}
