use serde::{Deserialize, Serialize};

/// Cuisines a recipe can be filed under.
pub const CUISINES: &[&str] = &[
    "Italian",
    "Mexican",
    "Asian",
    "Mediterranean",
    "American",
    "Indian",
    "French",
    "Greek",
    "Thai",
    "Japanese",
    "Chinese",
    "Spanish",
    "Middle Eastern",
    "Korean",
    "Vietnamese",
];

pub const MEAL_TYPES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Dessert",
    "Snack",
    "Appetizer",
    "Side Dish",
    "Drink",
];

pub const DIETARY_OPTIONS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Keto",
    "Paleo",
    "Low-Carb",
    "Low-Fat",
    "Pescatarian",
    "Nut-Free",
];

/// Stored recipe. `rating` and `ratingCount` are always server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Preparation time in minutes.
    pub prep_time: i32,
    /// Cooking time in minutes.
    pub cooking_time: i32,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine: String,
    pub meal_type: String,
    pub dietary_options: Vec<String>,
    pub created_by: i32,
    pub rating: i32,
    pub rating_count: i32,
}

/// Request para criar receita. The owning user comes from the bearer token,
/// never from the body; rating fields cannot be supplied at all.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub prep_time: i32,
    pub cooking_time: i32,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine: String,
    pub meal_type: String,
    pub dietary_options: Vec<String>,
}

/// Partial update: only the fields present are merged onto the stored
/// record.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub prep_time: Option<i32>,
    pub cooking_time: Option<i32>,
    pub servings: Option<i32>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub dietary_options: Option<Vec<String>>,
    pub created_by: Option<i32>,
}

/// Recipe plus the favorite flag for the requesting user.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub is_favorite: bool,
}
