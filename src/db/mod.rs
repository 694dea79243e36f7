use anyhow::Result;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;

/// Connect to Postgres and make sure the schema exists.
///
/// Panics if DATABASE_URL isn't set — there is no useful degraded mode
/// without a database.
pub async fn connect() -> Result<PgPool> {
    let url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&url)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Idempotent schema setup, run on every startup.
async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            nickname TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL,
            created_at BIGINT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // creator_id is a real foreign key: recipe rows can't outlive their
    // creator, which is why user deletion cascades recipes first.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS recipes (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL,
            creator_id UUID NOT NULL REFERENCES users(id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
