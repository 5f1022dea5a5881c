use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::storage::MemStorage;
use crate::utils::error::AppError;

// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i32, // user id
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        UserInfo {
            id: user.id,
            username: user.username,
        }
    }
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "recipe-service-secret".to_string())
}

/// Issues a 24h bearer token for the given user.
pub fn generate_jwt(user: &User) -> Result<String, AppError> {
    let iat = Utc::now().timestamp() as usize;
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;

    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        iat,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

pub fn verify_token(token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

/// Registers a new account. Username uniqueness is enforced by the store's
/// check-and-insert, so a duplicate comes back as a Conflict.
pub async fn register(store: &MemStorage, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
    if request.username.is_empty() {
        return Err(AppError::Validation("Username is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("Password is required".to_string()));
    }

    let user = store
        .create_user(request.username.clone(), request.password.clone())
        .await?;
    let token = generate_jwt(&user)?;

    log::info!("✅ User registered: {} (id {})", user.username, user.id);

    Ok(AuthResponse {
        success: true,
        token,
        user: user.into(),
    })
}

/// Credentials are stored as-is, so matching is plain equality. Unknown
/// usernames and wrong passwords get the same answer.
pub async fn login(store: &MemStorage, request: &LoginRequest) -> Result<AuthResponse, AppError> {
    let user = store
        .get_user_by_username(&request.username)
        .await
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    if user.password != request.password {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = generate_jwt(&user)?;

    Ok(AuthResponse {
        success: true,
        token,
        user: user.into(),
    })
}

pub async fn get_current_user(store: &MemStorage, user_id: i32) -> Option<UserInfo> {
    store.get_user(user_id).await.map(UserInfo::from)
}
