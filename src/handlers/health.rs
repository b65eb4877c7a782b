use crate::handlers::users::MessageResponse;
use axum::Json;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/users/ping",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::success("pong!"))
}
