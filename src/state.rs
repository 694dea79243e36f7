use crate::store::{DynIdentityStore, DynRecipeStore};
use crate::utils::jwt::TokenService;
use std::sync::Arc;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: DynIdentityStore,
    pub recipes: DynRecipeStore,
    pub tokens: Arc<TokenService>,
}
