use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::storage::MemStorage;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub recipes: usize,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<MemStorage>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "recipe-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        recipes: store.get_all_recipes().await.len(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
