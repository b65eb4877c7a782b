use utoipa::OpenApi;
use crate::handlers::{
    health,
    users,
};
use crate::models::user::{CreateUserRequest, UserResponse};

/// Generate the OpenAPI documentation for the JSON API
#[derive(OpenApi)]
#[openapi(
    paths(
        health::ping,
        users::create_user,
        users::get_user,
        users::list_users,
    ),
    components(
        schemas(
            users::MessageResponse,
            users::UserEnvelope,
            users::UserList,
            users::UserListEnvelope,
            UserResponse,
            CreateUserRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User records"),
    )
)]
pub struct ApiDoc;
