//! Persistence interfaces.
//!
//! Handlers only ever see these traits; the concrete backend (Postgres in
//! production, in-memory in tests) is chosen once at startup and injected
//! through `AppState`. Single-row reads and writes only: no cross-record
//! transactions exist anywhere in this API.

pub mod memory;
pub mod postgres;

use crate::models::recipe::Recipe;
use crate::models::user::User;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn create_user(&self, user: &User) -> Result<()>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Returns true if a user was actually removed.
    async fn delete_user(&self, id: Uuid) -> Result<bool>;

    /// Liveness probe for the health endpoint.
    async fn ping(&self) -> Result<()>;
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Every recipe in the store. No filter, no sort, no pagination.
    async fn list_recipes(&self) -> Result<Vec<Recipe>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>>;

    /// Returns true if the recipe existed and was updated.
    async fn update_recipe(&self, recipe: &Recipe) -> Result<bool>;

    /// Returns true if a recipe was actually removed.
    async fn delete_recipe(&self, id: Uuid) -> Result<bool>;

    /// Cascade step of user deletion: remove everything a creator owns.
    /// Returns how many recipes went away.
    async fn delete_by_creator(&self, creator_id: Uuid) -> Result<u64>;
}

pub type DynIdentityStore = Arc<dyn IdentityStore>;
pub type DynRecipeStore = Arc<dyn RecipeStore>;
