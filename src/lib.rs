use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn repository::UserRepository>,
    pub config: config::Settings,
}

/// Create the main Axum application router
pub fn create_app(state: AppState) -> Router {
    let openapi = openapi::ApiDoc::openapi();

    Router::new()
        // Server-rendered page
        .merge(routes::pages::pages_router())
        // JSON API
        .merge(routes::users::users_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}
