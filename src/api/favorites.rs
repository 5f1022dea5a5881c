use actix_web::{web, HttpResponse, ResponseError};

use crate::services::auth_service::Claims;
use crate::services::favorite_service;
use crate::storage::MemStorage;

#[utoipa::path(
    post,
    path = "/api/v1/favorites/{recipeId}",
    tag = "Favorites",
    params(
        ("recipeId" = i32, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe added to favorites"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Recipe not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_favorite(
    user: web::ReqData<Claims>,
    store: web::Data<MemStorage>,
    path: web::Path<i32>,
) -> HttpResponse {
    let recipe_id = path.into_inner();
    log::info!("⭐ POST /favorites/{} - user {}", recipe_id, user.sub);

    match favorite_service::add(&store, user.sub, recipe_id).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Recipe added to favorites"
        })),
        Err(e) => e.error_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/favorites/{recipeId}",
    tag = "Favorites",
    params(
        ("recipeId" = i32, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe removed from favorites"),
        (status = 401, description = "Not logged in")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn remove_favorite(
    user: web::ReqData<Claims>,
    store: web::Data<MemStorage>,
    path: web::Path<i32>,
) -> HttpResponse {
    let recipe_id = path.into_inner();
    log::info!("💔 DELETE /favorites/{} - user {}", recipe_id, user.sub);

    // Removing a favorite that was never added is not an error.
    favorite_service::remove(&store, user.sub, recipe_id).await;

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Recipe removed from favorites"
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/favorites",
    tag = "Favorites",
    responses(
        (status = 200, description = "The user's favorite recipes"),
        (status = 401, description = "Not logged in")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_favorites(
    user: web::ReqData<Claims>,
    store: web::Data<MemStorage>,
) -> HttpResponse {
    log::info!("📋 GET /favorites - user {}", user.sub);

    let recipes = favorite_service::list(&store, user.sub).await;
    HttpResponse::Ok().json(recipes)
}
