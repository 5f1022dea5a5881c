use crate::models::{Favorite, Recipe};
use crate::storage::MemStorage;
use crate::utils::error::AppError;

/// Adds a recipe to the user's favorites. Recipe existence is checked
/// here, not by the store; the add itself is idempotent.
pub async fn add(store: &MemStorage, user_id: i32, recipe_id: i32) -> Result<Favorite, AppError> {
    if store.get_recipe(recipe_id).await.is_none() {
        return Err(AppError::NotFound("Recipe not found".to_string()));
    }

    Ok(store.add_to_favorites(user_id, recipe_id).await)
}

/// Removing a favorite that was never added simply reports `false`.
pub async fn remove(store: &MemStorage, user_id: i32, recipe_id: i32) -> bool {
    store.remove_from_favorites(user_id, recipe_id).await
}

pub async fn list(store: &MemStorage, user_id: i32) -> Vec<Recipe> {
    store.get_favorites(user_id).await
}
