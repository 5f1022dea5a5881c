use serde::{Deserialize, Serialize};

/// Registered account. Credentials are stored exactly as submitted; users
/// are never mutated or deleted after registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}
