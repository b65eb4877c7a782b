use crate::error::{ApiError, ApiResult};
use crate::models::user::{CreateUserRequest, NewUser, UserResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub status: String,
    pub data: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserList {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListEnvelope {
    pub status: String,
    pub data: UserList,
}

impl CreateUserRequest {
    /// Checks run in order: non-empty object, `username` key present, then field shapes
    pub fn from_payload(payload: Option<Value>) -> ApiResult<Self> {
        let map = match payload {
            Some(Value::Object(map)) if !map.is_empty() => map,
            _ => return Err(ApiError::InvalidPayload),
        };

        if !map.contains_key("username") {
            return Err(ApiError::InvalidPayload);
        }

        let request: CreateUserRequest =
            serde_json::from_value(Value::Object(map)).map_err(|_| ApiError::InvalidPayload)?;
        request.validate().map_err(|_| ApiError::InvalidPayload)?;

        Ok(request)
    }
}

pub(crate) async fn hash_password(password: String, cost: u32) -> ApiResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| ApiError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Invalid payload or email already exists", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let request = CreateUserRequest::from_payload(payload.map(|Json(value)| value))
        .map_err(|e| {
            warn!("Rejected user payload");
            e
        })?;

    if state.users.find_by_email(&request.email).await?.is_some() {
        warn!(email = %request.email, "Email already registered");
        return Err(ApiError::EmailExists);
    }

    let password_hash = match request.password {
        Some(password) => Some(hash_password(password, state.config.auth.bcrypt_log_rounds).await?),
        None => None,
    };

    let user = state
        .users
        .create(NewUser {
            username: request.username,
            email: request.email,
            password_hash,
        })
        .await?;

    info!(user_id = user.id, username = %user.username, "User created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::success(format!("{} was added!", user.email))),
    ))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "Numeric user ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelope),
        (status = 404, description = "User does not exist", body = MessageResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserEnvelope>> {
    let id: i64 = id.parse().map_err(|_| ApiError::UserNotFound)?;

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserEnvelope {
        status: "success".to_string(),
        data: user.into(),
    }))
}

/// List all users in creation order
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = UserListEnvelope)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListEnvelope>> {
    let users = state.users.list().await?;

    Ok(Json(UserListEnvelope {
        status: "success".to_string(),
        data: UserList {
            users: users.into_iter().map(UserResponse::from).collect(),
        },
    }))
}
