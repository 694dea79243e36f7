//! HashMap-backed stores for the integration tests and local hacking without
//! a Postgres around. Same contract as the Postgres stores, no persistence.
//!
//! Locks are taken per call and never held across an await, so the request
//! independence the API promises holds here too.

use super::{IdentityStore, RecipeStore};
use crate::models::recipe::Recipe;
use crate::models::user::User;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryIdentityStore {
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().map_err(|_| anyhow!("poisoned lock"))?;
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().map_err(|_| anyhow!("poisoned lock"))?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().map_err(|_| anyhow!("poisoned lock"))?;
        Ok(users.get(&id).cloned())
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool> {
        let mut users = self.users.write().map_err(|_| anyhow!("poisoned lock"))?;
        Ok(users.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryRecipeStore {
    recipes: RwLock<HashMap<Uuid, Recipe>>,
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().map_err(|_| anyhow!("poisoned lock"))?;
        recipes.insert(recipe.id, recipe.clone());
        Ok(())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().map_err(|_| anyhow!("poisoned lock"))?;
        Ok(recipes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>> {
        let recipes = self.recipes.read().map_err(|_| anyhow!("poisoned lock"))?;
        Ok(recipes.get(&id).cloned())
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<bool> {
        let mut recipes = self.recipes.write().map_err(|_| anyhow!("poisoned lock"))?;
        match recipes.get_mut(&recipe.id) {
            Some(existing) => {
                *existing = recipe.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_recipe(&self, id: Uuid) -> Result<bool> {
        let mut recipes = self.recipes.write().map_err(|_| anyhow!("poisoned lock"))?;
        Ok(recipes.remove(&id).is_some())
    }

    async fn delete_by_creator(&self, creator_id: Uuid) -> Result<u64> {
        let mut recipes = self.recipes.write().map_err(|_| anyhow!("poisoned lock"))?;
        let before = recipes.len();
        recipes.retain(|_, r| r.creator_id != creator_id);
        Ok((before - recipes.len()) as u64)
    }
}
