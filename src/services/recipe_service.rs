use crate::models::{
    CreateRecipeRequest, Recipe, RecipeDetailResponse, UpdateRecipeRequest, CUISINES,
    DIETARY_OPTIONS, MEAL_TYPES,
};
use crate::storage::MemStorage;
use crate::utils::error::AppError;

fn validate_cuisine(cuisine: &str) -> Result<(), AppError> {
    if CUISINES.contains(&cuisine) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Unknown cuisine: {}", cuisine)))
    }
}

fn validate_meal_type(meal_type: &str) -> Result<(), AppError> {
    if MEAL_TYPES.contains(&meal_type) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Unknown meal type: {}", meal_type)))
    }
}

fn validate_dietary_options(options: &[String]) -> Result<(), AppError> {
    for option in options {
        if !DIETARY_OPTIONS.contains(&option.as_str()) {
            return Err(AppError::Validation(format!(
                "Unknown dietary option: {}",
                option
            )));
        }
    }
    Ok(())
}

/// Recipe plus the favorite flag for the (optionally) logged-in viewer.
pub async fn get_detail(
    store: &MemStorage,
    recipe_id: i32,
    viewer: Option<i32>,
) -> Result<RecipeDetailResponse, AppError> {
    let recipe = store
        .get_recipe(recipe_id)
        .await
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;

    let is_favorite = match viewer {
        Some(user_id) => store.is_favorite(user_id, recipe_id).await,
        None => false,
    };

    Ok(RecipeDetailResponse { recipe, is_favorite })
}

pub async fn create(
    store: &MemStorage,
    user_id: i32,
    data: CreateRecipeRequest,
) -> Result<Recipe, AppError> {
    if data.title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    validate_cuisine(&data.cuisine)?;
    validate_meal_type(&data.meal_type)?;
    validate_dietary_options(&data.dietary_options)?;

    Ok(store.create_recipe(data, user_id).await)
}

/// Ownership is enforced here; the store itself mutates unconditionally
/// once called.
pub async fn update(
    store: &MemStorage,
    user_id: i32,
    recipe_id: i32,
    data: UpdateRecipeRequest,
) -> Result<Recipe, AppError> {
    let existing = store
        .get_recipe(recipe_id)
        .await
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;

    if existing.created_by != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to update this recipe".to_string(),
        ));
    }

    if let Some(cuisine) = &data.cuisine {
        validate_cuisine(cuisine)?;
    }
    if let Some(meal_type) = &data.meal_type {
        validate_meal_type(meal_type)?;
    }
    if let Some(options) = &data.dietary_options {
        validate_dietary_options(options)?;
    }

    store
        .update_recipe(recipe_id, &data)
        .await
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))
}

pub async fn delete(store: &MemStorage, user_id: i32, recipe_id: i32) -> Result<(), AppError> {
    let existing = store
        .get_recipe(recipe_id)
        .await
        .ok_or_else(|| AppError::NotFound("Recipe not found".to_string()))?;

    if existing.created_by != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to delete this recipe".to_string(),
        ));
    }

    store.delete_recipe(recipe_id).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_data(title: &str) -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: title.to_string(),
            description: "A test recipe".to_string(),
            image_url: "https://example.com/image.jpg".to_string(),
            prep_time: 10,
            cooking_time: 20,
            servings: 2,
            ingredients: vec!["1 cup flour".to_string()],
            instructions: vec!["Mix everything.".to_string()],
            cuisine: "Italian".to_string(),
            meal_type: "Dinner".to_string(),
            dietary_options: vec!["Vegetarian".to_string()],
        }
    }

    #[actix_rt::test]
    async fn create_rejects_values_outside_the_fixed_sets() {
        let store = MemStorage::new();

        let mut bad_cuisine = recipe_data("Pasta");
        bad_cuisine.cuisine = "Klingon".to_string();
        assert!(matches!(
            create(&store, 1, bad_cuisine).await,
            Err(AppError::Validation(_))
        ));

        let mut bad_option = recipe_data("Pasta");
        bad_option.dietary_options = vec!["Carnivore".to_string()];
        assert!(matches!(
            create(&store, 1, bad_option).await,
            Err(AppError::Validation(_))
        ));

        assert!(store.get_all_recipes().await.is_empty());
    }

    #[actix_rt::test]
    async fn update_is_owner_only() {
        let store = MemStorage::new();
        let recipe = store.create_recipe(recipe_data("Pasta"), 1).await;

        let update_request = UpdateRecipeRequest {
            title: Some("Stolen".to_string()),
            ..UpdateRecipeRequest::default()
        };
        let result = update(&store, 2, recipe.id, update_request).await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert_eq!(store.get_recipe(recipe.id).await.unwrap().title, "Pasta");
    }

    #[actix_rt::test]
    async fn update_missing_recipe_is_not_found() {
        let store = MemStorage::new();

        let result = update(&store, 1, 42, UpdateRecipeRequest::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_rt::test]
    async fn delete_is_owner_only() {
        let store = MemStorage::new();
        let recipe = store.create_recipe(recipe_data("Pasta"), 1).await;

        assert!(matches!(
            delete(&store, 2, recipe.id).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(store.get_recipe(recipe.id).await.is_some());

        delete(&store, 1, recipe.id).await.unwrap();
        assert!(store.get_recipe(recipe.id).await.is_none());
    }

    #[actix_rt::test]
    async fn detail_reports_favorite_status_per_viewer() {
        let store = MemStorage::new();
        let recipe = store.create_recipe(recipe_data("Pasta"), 1).await;
        store.add_to_favorites(7, recipe.id).await;

        let fan = get_detail(&store, recipe.id, Some(7)).await.unwrap();
        assert!(fan.is_favorite);

        let stranger = get_detail(&store, recipe.id, Some(8)).await.unwrap();
        assert!(!stranger.is_favorite);

        let anonymous = get_detail(&store, recipe.id, None).await.unwrap();
        assert!(!anonymous.is_favorite);
    }
}
