use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use sail_core::config::{RemoteConfig, SourceConfig};
use sail_server::routes;
use sail_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sail=info".parse()?))
        .with_target(false)
        .init();

    let port = std::env::var("SAIL_SERVER_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");

    let source = SourceConfig::from_env();
    let remote = match RemoteConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Remote provider disabled: {e}");
            None
        }
    };
    tracing::info!(fixture = %source.fixture_path.display(), "Static provider ready");

    let state = Arc::new(AppState { source, remote });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
