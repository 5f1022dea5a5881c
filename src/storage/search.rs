use crate::models::{Recipe, RecipeSearch};

/// Applies a search specification to the recipe collection: free-text
/// match, exact-match filters, then an optional sort.
///
/// - The free-text query is lower-cased and matched as a substring of the
///   title or of any single ingredient line.
/// - `cuisine` and `mealType` are exact string equality; `dietaryOption`
///   must appear in the recipe's dietary options.
/// - `sort=popular` orders by rating descending, `sort=newest` by id
///   descending, `sort=cookingTime` by cooking time ascending. Sorting is
///   stable, so ties keep their store order. Any other value (or none)
///   leaves the order untouched.
///
/// Empty filter strings count as absent. This is a plain linear scan over
/// the full collection — there is no index, pagination or relevance
/// scoring.
pub fn apply(recipes: Vec<Recipe>, search: &RecipeSearch) -> Vec<Recipe> {
    let mut results = recipes;

    if let Some(query) = search.query.as_deref().filter(|q| !q.is_empty()) {
        let query = query.to_lowercase();
        results.retain(|recipe| {
            recipe.title.to_lowercase().contains(&query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains(&query))
        });
    }

    if let Some(cuisine) = search.cuisine.as_deref().filter(|c| !c.is_empty()) {
        results.retain(|recipe| recipe.cuisine == cuisine);
    }

    if let Some(meal_type) = search.meal_type.as_deref().filter(|m| !m.is_empty()) {
        results.retain(|recipe| recipe.meal_type == meal_type);
    }

    if let Some(option) = search.dietary_option.as_deref().filter(|o| !o.is_empty()) {
        results.retain(|recipe| recipe.dietary_options.iter().any(|o| o == option));
    }

    match search.sort.as_deref() {
        Some("popular") => results.sort_by(|a, b| b.rating.cmp(&a.rating)),
        Some("newest") => results.sort_by(|a, b| b.id.cmp(&a.id)),
        Some("cookingTime") => results.sort_by(|a, b| a.cooking_time.cmp(&b.cooking_time)),
        _ => {}
    }

    results
}
