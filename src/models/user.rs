use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Row of the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// bcrypt hash, never serialized
    pub password: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// User information returned in API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user ID
    pub id: i64,
    /// Username
    pub username: String,
    /// Email address
    pub email: String,
    /// Whether the account is active
    pub active: bool,
    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
}

/// JSON body of `POST /users`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 128))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub email: String,
    /// Optional plain-text password, stored hashed
    #[serde(default)]
    pub password: Option<String>,
}

/// Form fields of `POST /`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub email: String,
}
