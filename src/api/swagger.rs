use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe Service API",
        version = "1.0.0",
        description = "REST API for browsing, searching and sharing recipes. \n\n**Authentication:** Registration and login issue a JWT Bearer token; recipe submission and favorites require it.\n\n**Features:**\n- Free-text recipe search with cuisine, meal type and dietary filters\n- Popularity, recency and cooking time sorting\n- Per-user favorites\n- Health monitoring"
    ),
    paths(
        // Auth endpoints
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::auth::logout,
        crate::api::auth::get_me,

        // Health
        crate::api::health::health_check,

        // Recipes
        crate::api::recipes::search_recipes,
        crate::api::recipes::get_recipe,
        crate::api::recipes::create_recipe,
        crate::api::recipes::update_recipe,
        crate::api::recipes::delete_recipe,

        // Favorites
        crate::api::favorites::add_favorite,
        crate::api::favorites::remove_favorite,
        crate::api::favorites::list_favorites,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::AuthResponse,
            crate::services::auth_service::UserInfo,

            // Health
            crate::api::health::HealthResponse,

            // Recipes
            crate::models::Recipe,
            crate::models::CreateRecipeRequest,
            crate::models::UpdateRecipeRequest,
            crate::models::RecipeDetailResponse,
            crate::models::RecipeSearch,
            crate::models::Favorite,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and current-user endpoints."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "Recipes", description = "Recipe search, detail and owner-only management endpoints."),
        (name = "Favorites", description = "Per-user favorite recipes."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            );
        }
    }
}
