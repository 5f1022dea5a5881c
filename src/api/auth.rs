use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::middleware::auth::maybe_authenticate;
use crate::services::auth_service::{self, AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use crate::storage::MemStorage;

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = AuthResponse),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn register(
    store: web::Data<MemStorage>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    log::info!("📝 POST /auth/register - username: {}", request.username);

    match auth_service::register(&store, &request).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", request.username, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    store: web::Data<MemStorage>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /auth/login - username: {}", request.username);

    match auth_service::login(&store, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.username);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.username, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Logged out")
    )
)]
pub async fn logout() -> HttpResponse {
    // Bearer tokens are stateless; the client just discards its copy.
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Logged out successfully"
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current user info, or null when not logged in", body = UserInfo)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(req: HttpRequest, store: web::Data<MemStorage>) -> HttpResponse {
    // Anonymous callers get a JSON null rather than an error.
    let user = match maybe_authenticate(&req) {
        Some(claims) => auth_service::get_current_user(&store, claims.sub).await,
        None => None,
    };

    match user {
        Some(info) => HttpResponse::Ok().json(info),
        None => HttpResponse::Ok().json(serde_json::Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};

    use crate::api;
    use crate::storage::MemStorage;

    #[actix_web::test]
    async fn register_login_me_round_trip() {
        let store = MemStorage::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({ "username": "alice", "password": "secret" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["username"], "alice");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "username": "alice", "password": "secret" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let token = body["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["username"], "alice");
    }

    #[actix_web::test]
    async fn duplicate_registration_is_a_conflict() {
        let store = MemStorage::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        let payload = serde_json::json!({ "username": "alice", "password": "secret" });

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(payload.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(payload)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn wrong_password_is_unauthorized() {
        let store = MemStorage::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({ "username": "alice", "password": "secret" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "username": "alice", "password": "guess" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_web::test]
    async fn me_without_token_is_null() {
        let store = MemStorage::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_null());
    }
}
