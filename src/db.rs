use crate::config::settings::DatabaseSettings;
use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use sqlx::migrate::Migrator;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Versioned schema migrations, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";
pub const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";

const UNIQUE_VIOLATION: &str = "23505";

pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(60))
        .max_lifetime(Duration::from_secs(3600))
        .connect(settings.url.expose_secret())
        .await
        .context("Failed to create database connection pool")?;

    pool.acquire()
        .await
        .context("Failed to acquire initial database connection")?;

    Ok(pool)
}

/// Column protected by a uniqueness constraint on `users`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Username,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::Email => write!(f, "email"),
            UniqueField::Username => write!(f, "username"),
        }
    }
}

/// Maps a violated constraint name to the column it protects
pub fn classify_unique_constraint(constraint: Option<&str>) -> Option<UniqueField> {
    match constraint? {
        EMAIL_UNIQUE_CONSTRAINT => Some(UniqueField::Email),
        USERNAME_UNIQUE_CONSTRAINT => Some(UniqueField::Username),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Record not found")]
    NotFound,
    #[error("Record with this {0} already exists")]
    AlreadyExists(UniqueField),
    #[error("Database error: {0}")]
    Other(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return DatabaseError::NotFound;
        }

        let violated = err
            .as_database_error()
            .filter(|db_err| db_err.code().as_deref() == Some(UNIQUE_VIOLATION))
            .and_then(|db_err| classify_unique_constraint(db_err.constraint()));

        match violated {
            Some(field) => DatabaseError::AlreadyExists(field),
            None => DatabaseError::Other(err),
        }
    }
}
