use crate::db::{DatabaseError, UniqueField};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid payload.")]
    InvalidPayload,

    #[error("Sorry. Email already exists.")]
    EmailExists,

    #[error("User does not exist")]
    UserNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload | ApiError::EmailExists => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound => ApiError::UserNotFound,
            DatabaseError::AlreadyExists(UniqueField::Email) => ApiError::EmailExists,
            DatabaseError::AlreadyExists(UniqueField::Username) => ApiError::InvalidPayload,
            DatabaseError::Other(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            ref other => other.to_string(),
        };

        let body = Json(json!({
            "status": "fail",
            "message": message,
        }));

        (status, body).into_response()
    }
}
