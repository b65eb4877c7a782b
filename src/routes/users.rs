use crate::handlers::{health, users};
use crate::AppState;
use axum::{
    routing::get,
    Router,
};

pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/users/ping", get(health::ping))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user))
}
