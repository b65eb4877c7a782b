use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use users_service::config::{Profile, Settings};
use users_service::repository::postgres::PgUserRepository;
use users_service::{create_app, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load application settings")?;

    let default_filter = match settings.profile {
        Profile::Development => "users_service=debug,tower_http=debug",
        Profile::Testing | Profile::Production => "users_service=info,tower_http=info",
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!(profile = %settings.profile, debug = settings.debug, "Starting users service");
    info!("Connecting to database: {}", settings.database.redacted_url());

    let pool = db::create_pool(&settings.database).await?;
    info!(
        "Database pool established with {} max connections",
        settings.database.max_connections
    );
    info!("Schema is managed separately; run `migrate upgrade` before first start");

    let state = AppState {
        users: Arc::new(PgUserRepository::new(pool)),
        config: settings.clone(),
    };

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server.listen_address)
        .await
        .context("Failed to bind to server address")?;

    info!("Listening on {}", settings.server.listen_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Users service shutdown completed");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
