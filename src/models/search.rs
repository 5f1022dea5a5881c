use serde::Deserialize;

/// Search specification parsed straight from the query string. Every field
/// is optional; absent (or empty) fields mean "no filter".
///
/// `sort` accepts `popular`, `newest` or `cookingTime`; any other value
/// leaves the result order untouched.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearch {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub dietary_option: Option<String>,
    pub sort: Option<String>,
}
