use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::middleware::auth::{authenticate, maybe_authenticate};
use crate::models::{CreateRecipeRequest, RecipeSearch, UpdateRecipeRequest};
use crate::services::recipe_service;
use crate::storage::MemStorage;

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "Recipes",
    params(
        ("query" = Option<String>, Query, description = "Free-text match against title and ingredients"),
        ("cuisine" = Option<String>, Query, description = "Exact cuisine filter"),
        ("mealType" = Option<String>, Query, description = "Exact meal type filter"),
        ("dietaryOption" = Option<String>, Query, description = "Dietary option the recipe must offer"),
        ("sort" = Option<String>, Query, description = "popular | newest | cookingTime")
    ),
    responses(
        (status = 200, description = "Matching recipes")
    )
)]
pub async fn search_recipes(
    store: web::Data<MemStorage>,
    search: web::Query<RecipeSearch>,
) -> HttpResponse {
    log::info!("🔍 GET /recipes - {:?}", search.0);

    let recipes = store.search_recipes(&search).await;
    HttpResponse::Ok().json(recipes)
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}",
    tag = "Recipes",
    params(
        ("id" = i32, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe with favorite status for the caller"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn get_recipe(
    req: HttpRequest,
    store: web::Data<MemStorage>,
    path: web::Path<i32>,
) -> HttpResponse {
    let recipe_id = path.into_inner();
    log::info!("🍽️ GET /recipes/{}", recipe_id);

    let viewer = maybe_authenticate(&req).map(|claims| claims.sub);

    match recipe_service::get_detail(&store, recipe_id, viewer).await {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(e) => e.error_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "Recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not logged in")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    req: HttpRequest,
    store: web::Data<MemStorage>,
    payload: web::Json<CreateRecipeRequest>,
) -> HttpResponse {
    let claims = match authenticate(&req) {
        Ok(claims) => claims,
        Err(e) => return e.error_response(),
    };
    log::info!("🍳 POST /recipes - '{}' by user {}", payload.title, claims.sub);

    match recipe_service::create(&store, claims.sub, payload.into_inner()).await {
        Ok(recipe) => HttpResponse::Created().json(recipe),
        Err(e) => {
            log::warn!("❌ Recipe creation rejected: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/recipes/{id}",
    tag = "Recipes",
    params(
        ("id" = i32, Path, description = "Recipe id")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated"),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Not the recipe owner"),
        (status = 404, description = "Recipe not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    req: HttpRequest,
    store: web::Data<MemStorage>,
    path: web::Path<i32>,
    payload: web::Json<UpdateRecipeRequest>,
) -> HttpResponse {
    let claims = match authenticate(&req) {
        Ok(claims) => claims,
        Err(e) => return e.error_response(),
    };
    let recipe_id = path.into_inner();
    log::info!("✏️ PUT /recipes/{} - user {}", recipe_id, claims.sub);

    match recipe_service::update(&store, claims.sub, recipe_id, payload.into_inner()).await {
        Ok(recipe) => HttpResponse::Ok().json(recipe),
        Err(e) => {
            log::warn!("❌ Recipe update rejected: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{id}",
    tag = "Recipes",
    params(
        ("id" = i32, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe deleted"),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "Not the recipe owner"),
        (status = 404, description = "Recipe not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_recipe(
    req: HttpRequest,
    store: web::Data<MemStorage>,
    path: web::Path<i32>,
) -> HttpResponse {
    let claims = match authenticate(&req) {
        Ok(claims) => claims,
        Err(e) => return e.error_response(),
    };
    let recipe_id = path.into_inner();
    log::info!("🗑️ DELETE /recipes/{} - user {}", recipe_id, claims.sub);

    match recipe_service::delete(&store, claims.sub, recipe_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Recipe deleted successfully"
        })),
        Err(e) => e.error_response(),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};

    use crate::api;
    use crate::seeds::sample_recipes_seed;
    use crate::services::auth_service;
    use crate::storage::MemStorage;

    async fn seeded_store() -> MemStorage {
        let store = MemStorage::new();
        sample_recipes_seed::seed_sample_data(&store).await;
        store
    }

    /// Registers a user straight in the store and returns an
    /// `Authorization` header value for them.
    async fn bearer(store: &MemStorage, username: &str) -> String {
        let user = store
            .create_user(username.to_string(), "secret".to_string())
            .await
            .unwrap();
        format!("Bearer {}", auth_service::generate_jwt(&user).unwrap())
    }

    #[actix_web::test]
    async fn search_matches_title_substring() {
        let store = seeded_store().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/recipes?query=pizza")
            .to_request();
        let recipes: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["title"], "Classic Margherita Pizza");
    }

    #[actix_web::test]
    async fn search_uses_camel_case_parameters() {
        let store = seeded_store().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/recipes?mealType=Dessert")
            .to_request();
        let recipes: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0]["title"], "Fudgy Chocolate Brownies");
    }

    #[actix_web::test]
    async fn create_requires_a_token() {
        let store = seeded_store().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/recipes")
            .set_json(serde_json::json!({
                "title": "Toast",
                "description": "Bread, but better",
                "imageUrl": "https://example.com/toast.jpg",
                "prepTime": 2,
                "cookingTime": 3,
                "servings": 1,
                "ingredients": ["2 slices of bread"],
                "instructions": ["Toast the bread."],
                "cuisine": "American",
                "mealType": "Breakfast",
                "dietaryOptions": ["Vegetarian"]
            }))
            .to_request();

        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn recipe_lifecycle_over_http() {
        let store = seeded_store().await;
        let auth = bearer(&store, "cook").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        // Create
        let req = test::TestRequest::post()
            .uri("/api/v1/recipes")
            .insert_header(("Authorization", auth.clone()))
            .set_json(serde_json::json!({
                "title": "Midnight Toast",
                "description": "Bread, but better",
                "imageUrl": "https://example.com/toast.jpg",
                "prepTime": 2,
                "cookingTime": 3,
                "servings": 1,
                "ingredients": ["2 slices of bread"],
                "instructions": ["Toast the bread."],
                "cuisine": "American",
                "mealType": "Breakfast",
                "dietaryOptions": ["Vegetarian"]
            }))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        // Seeded recipes occupy ids 1-6.
        assert_eq!(created["id"], 7);
        assert_eq!(created["rating"], 0);
        assert_eq!(created["ratingCount"], 0);

        // Update only the title; everything else must survive.
        let req = test::TestRequest::put()
            .uri("/api/v1/recipes/7")
            .insert_header(("Authorization", auth.clone()))
            .set_json(serde_json::json!({ "title": "Breakfast Toast" }))
            .to_request();
        let updated: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["title"], "Breakfast Toast");
        assert_eq!(updated["cookingTime"], 3);
        assert_eq!(updated["cuisine"], "American");

        // Delete, then the detail route reports 404.
        let req = test::TestRequest::delete()
            .uri("/api/v1/recipes/7")
            .insert_header(("Authorization", auth))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/v1/recipes/7").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn non_owner_updates_are_forbidden() {
        let store = seeded_store().await;
        let auth = bearer(&store, "intruder").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        // Recipe 1 belongs to the seeded demo user.
        let req = test::TestRequest::put()
            .uri("/api/v1/recipes/1")
            .insert_header(("Authorization", auth.clone()))
            .set_json(serde_json::json!({ "title": "Hijacked" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );

        let req = test::TestRequest::delete()
            .uri("/api/v1/recipes/1")
            .insert_header(("Authorization", auth))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn detail_includes_favorite_status() {
        let store = seeded_store().await;
        let auth = bearer(&store, "fan").await;
        let fan_id = store.get_user_by_username("fan").await.unwrap().id;
        store.add_to_favorites(fan_id, 1).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        // Anonymous viewers always see isFavorite = false.
        let req = test::TestRequest::get().uri("/api/v1/recipes/1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["isFavorite"], false);

        let req = test::TestRequest::get()
            .uri("/api/v1/recipes/1")
            .insert_header(("Authorization", auth))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["isFavorite"], true);
    }
}
