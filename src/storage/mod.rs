use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{CreateRecipeRequest, Favorite, Recipe, RecipeSearch, UpdateRecipeRequest, User};
use crate::utils::error::AppError;

pub mod search;

struct StoreInner {
    users: BTreeMap<i32, User>,
    recipes: BTreeMap<i32, Recipe>,
    favorites: BTreeMap<i32, Favorite>,
    next_user_id: i32,
    next_recipe_id: i32,
    next_favorite_id: i32,
}

/// Process-lifetime in-memory store for users, recipes and favorites.
///
/// Cheap to clone — every clone shares the same state, so a single instance
/// built at startup can be handed to each worker via `web::Data`. All
/// mutations go through one write lock, keeping id assignment and
/// check-and-insert sequences atomic under parallel workers.
///
/// Ids are assigned sequentially and never reused, so ascending-id
/// iteration over the maps equals insertion order.
#[derive(Clone)]
pub struct MemStorage {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                users: BTreeMap::new(),
                recipes: BTreeMap::new(),
                favorites: BTreeMap::new(),
                next_user_id: 1,
                next_recipe_id: 1,
                next_favorite_id: 1,
            })),
        }
    }

    // ──────────────── Users ────────────────

    pub async fn get_user(&self, id: i32) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    /// Case-sensitive exact match.
    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Atomic check-and-insert: the uniqueness check and the insert happen
    /// under the same write lock, so two racing registrations for one
    /// username cannot both succeed.
    pub async fn create_user(&self, username: String, password: String) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|user| user.username == username) {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }

        let id = inner.next_user_id;
        inner.next_user_id += 1;

        let user = User { id, username, password };
        inner.users.insert(id, user.clone());
        Ok(user)
    }

    // ──────────────── Recipes ────────────────

    pub async fn get_recipe(&self, id: i32) -> Option<Recipe> {
        self.inner.read().await.recipes.get(&id).cloned()
    }

    /// Full collection in store order.
    pub async fn get_all_recipes(&self) -> Vec<Recipe> {
        self.inner.read().await.recipes.values().cloned().collect()
    }

    pub async fn search_recipes(&self, search: &RecipeSearch) -> Vec<Recipe> {
        search::apply(self.get_all_recipes().await, search)
    }

    /// `rating` and `ratingCount` start at zero no matter what the caller
    /// supplies elsewhere.
    pub async fn create_recipe(&self, data: CreateRecipeRequest, created_by: i32) -> Recipe {
        let mut inner = self.inner.write().await;

        let id = inner.next_recipe_id;
        inner.next_recipe_id += 1;

        let recipe = Recipe {
            id,
            title: data.title,
            description: data.description,
            image_url: data.image_url,
            prep_time: data.prep_time,
            cooking_time: data.cooking_time,
            servings: data.servings,
            ingredients: data.ingredients,
            instructions: data.instructions,
            cuisine: data.cuisine,
            meal_type: data.meal_type,
            dietary_options: data.dietary_options,
            created_by,
            rating: 0,
            rating_count: 0,
        };
        inner.recipes.insert(id, recipe.clone());
        recipe
    }

    /// Shallow merge: present fields overwrite, absent fields survive.
    /// Enumerated fields are not re-validated here — that is the caller's
    /// job before the update reaches the store.
    pub async fn update_recipe(&self, id: i32, update: &UpdateRecipeRequest) -> Option<Recipe> {
        let mut inner = self.inner.write().await;
        let recipe = inner.recipes.get_mut(&id)?;

        if let Some(title) = &update.title {
            recipe.title = title.clone();
        }
        if let Some(description) = &update.description {
            recipe.description = description.clone();
        }
        if let Some(image_url) = &update.image_url {
            recipe.image_url = image_url.clone();
        }
        if let Some(prep_time) = update.prep_time {
            recipe.prep_time = prep_time;
        }
        if let Some(cooking_time) = update.cooking_time {
            recipe.cooking_time = cooking_time;
        }
        if let Some(servings) = update.servings {
            recipe.servings = servings;
        }
        if let Some(ingredients) = &update.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(instructions) = &update.instructions {
            recipe.instructions = instructions.clone();
        }
        if let Some(cuisine) = &update.cuisine {
            recipe.cuisine = cuisine.clone();
        }
        if let Some(meal_type) = &update.meal_type {
            recipe.meal_type = meal_type.clone();
        }
        if let Some(dietary_options) = &update.dietary_options {
            recipe.dietary_options = dietary_options.clone();
        }
        if let Some(created_by) = update.created_by {
            recipe.created_by = created_by;
        }

        Some(recipe.clone())
    }

    /// Returns whether a record existed.
    pub async fn delete_recipe(&self, id: i32) -> bool {
        self.inner.write().await.recipes.remove(&id).is_some()
    }

    // ──────────────── Favorites ────────────────

    /// Idempotent: adding an existing (user, recipe) pair returns the
    /// stored row unchanged. Neither id is checked for existence here.
    pub async fn add_to_favorites(&self, user_id: i32, recipe_id: i32) -> Favorite {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.recipe_id == recipe_id)
        {
            return existing.clone();
        }

        let id = inner.next_favorite_id;
        inner.next_favorite_id += 1;

        let favorite = Favorite { id, user_id, recipe_id };
        inner.favorites.insert(id, favorite.clone());
        favorite
    }

    /// Returns whether a removal occurred; removing a favorite that was
    /// never added is not an error.
    pub async fn remove_from_favorites(&self, user_id: i32, recipe_id: i32) -> bool {
        let mut inner = self.inner.write().await;

        let id = inner
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.recipe_id == recipe_id)
            .map(|f| f.id);

        match id {
            Some(id) => inner.favorites.remove(&id).is_some(),
            None => false,
        }
    }

    /// The user's favorite recipes, in the recipe collection's natural
    /// order rather than favorite-creation order.
    pub async fn get_favorites(&self, user_id: i32) -> Vec<Recipe> {
        let inner = self.inner.read().await;

        let recipe_ids: Vec<i32> = inner
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.recipe_id)
            .collect();

        inner
            .recipes
            .values()
            .filter(|recipe| recipe_ids.contains(&recipe.id))
            .cloned()
            .collect()
    }

    pub async fn is_favorite(&self, user_id: i32, recipe_id: i32) -> bool {
        self.inner
            .read()
            .await
            .favorites
            .values()
            .any(|f| f.user_id == user_id && f.recipe_id == recipe_id)
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}
