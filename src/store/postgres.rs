use super::{IdentityStore, RecipeStore};
use crate::models::recipe::Recipe;
use crate::models::user::{Role, User};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Row shape for the users table. Role lives in the database as TEXT, so the
/// row type carries a String and conversion to the enum happens here, where a
/// corrupt value can surface as a real error instead of a panic.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    nickname: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: i64,
}

impl UserRow {
    fn into_user(self) -> Result<User> {
        let role = Role::from_str(&self.role)
            .ok_or_else(|| anyhow!("unknown role '{}' stored for user {}", self.role, self.id))?;

        Ok(User {
            id: self.id,
            nickname: self.nickname,
            email: self.email,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn create_user(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, nickname, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(&user.nickname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert user")?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to query user by email")?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to query user by id")?;

        row.map(UserRow::into_user).transpose()
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete user")?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO recipes (id, title, description, created_at, updated_at, creator_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(recipe.id)
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(recipe.created_at)
        .bind(recipe.updated_at)
        .bind(recipe.creator_id)
        .execute(&self.pool)
        .await
        .context("Failed to insert recipe")?;

        Ok(())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipes")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list recipes")
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>> {
        sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to query recipe")
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE recipes
            SET title = $1, description = $2, updated_at = $3
            WHERE id = $4
            "#,
        )
        .bind(&recipe.title)
        .bind(&recipe.description)
        .bind(recipe.updated_at)
        .bind(recipe.id)
        .execute(&self.pool)
        .await
        .context("Failed to update recipe")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_recipe(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete recipe")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_creator(&self, creator_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM recipes WHERE creator_id = $1")
            .bind(creator_id)
            .execute(&self.pool)
            .await
            .context("Failed to delete recipes by creator")?;

        Ok(result.rows_affected())
    }
}
