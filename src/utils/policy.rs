//! Authorization rules shared by every endpoint that touches someone else's
//! data. State-free: the caller fetches the resource, these functions decide.

use crate::error::ApiError;
use crate::models::recipe::Recipe;
use crate::models::user::{Role, TokenPayload};
use uuid::Uuid;

/// Edit/delete a recipe: admins always, normal users only their own.
pub fn can_modify_recipe(user: &TokenPayload, recipe: &Recipe) -> Result<(), ApiError> {
    if user.role == Role::Admin || recipe.creator_id == user.id {
        return Ok(());
    }

    Err(ApiError::Forbidden(
        "Only admins can modify other users' recipes".to_string(),
    ))
}

/// Delete a user: admins only, and never themselves.
///
/// Self-deletion is a 400, not a 403 — the caller has the right role, the
/// request itself is nonsensical.
pub fn can_delete_user(user: &TokenPayload, target_id: Uuid) -> Result<(), ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden(
            "Only admins can delete users".to_string(),
        ));
    }

    if user.id == target_id {
        return Err(ApiError::Validation(
            "Cannot delete your own account".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(role: Role) -> TokenPayload {
        TokenPayload {
            id: Uuid::new_v4(),
            role,
        }
    }

    fn recipe_owned_by(creator_id: Uuid) -> Recipe {
        Recipe {
            id: Uuid::new_v4(),
            title: "Carrot cake".to_string(),
            description: "Grate carrots, mix, bake.".to_string(),
            created_at: 0,
            updated_at: 0,
            creator_id,
        }
    }

    #[test]
    fn owner_can_modify_own_recipe() {
        let user = payload(Role::Normal);
        let recipe = recipe_owned_by(user.id);
        assert!(can_modify_recipe(&user, &recipe).is_ok());
    }

    #[test]
    fn normal_user_cannot_modify_other_recipe() {
        let user = payload(Role::Normal);
        let recipe = recipe_owned_by(Uuid::new_v4());
        assert!(matches!(
            can_modify_recipe(&user, &recipe),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn admin_can_modify_any_recipe() {
        let user = payload(Role::Admin);
        let recipe = recipe_owned_by(Uuid::new_v4());
        assert!(can_modify_recipe(&user, &recipe).is_ok());
    }

    #[test]
    fn normal_user_cannot_delete_users() {
        let user = payload(Role::Normal);
        assert!(matches!(
            can_delete_user(&user, Uuid::new_v4()),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn admin_cannot_delete_self() {
        let user = payload(Role::Admin);
        assert!(matches!(
            can_delete_user(&user, user.id),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn admin_can_delete_other_user() {
        let user = payload(Role::Admin);
        assert!(can_delete_user(&user, Uuid::new_v4()).is_ok());
    }
}
