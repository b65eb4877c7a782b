use crate::db::DatabaseError;
use crate::models::user::{NewUser, User};
use async_trait::async_trait;

/// Persistence backend for user records
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a user; uniqueness violations surface as `DatabaseError::AlreadyExists`
    async fn create(&self, new_user: NewUser) -> Result<User, DatabaseError>;

    /// Get a user by id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DatabaseError>;

    /// Get a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    /// All users in creation order
    async fn list(&self) -> Result<Vec<User>, DatabaseError>;
}

pub mod postgres;
