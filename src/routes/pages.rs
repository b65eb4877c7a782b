use crate::handlers::pages;
use crate::AppState;
use axum::{
    routing::get,
    Router,
};

pub fn pages_router() -> Router<AppState> {
    Router::new().route("/", get(pages::index).post(pages::add_user))
}
