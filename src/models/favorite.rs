use serde::{Deserialize, Serialize};

/// User-to-recipe bookmark. At most one row exists per (userId, recipeId)
/// pair.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: i32,
}
