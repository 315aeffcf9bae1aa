use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use url::Url;

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub upstream_url: String,
    pub api_key: String,
    pub request_timeout: Duration,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let upstream_url = Url::parse(&config.upstream_url)
        .with_context(|| format!("invalid NEODB_URL: {}", config.upstream_url))?;

    let state = AppState::from_config(AppStateConfig {
        upstream_url: upstream_url.clone(),
        api_key: config.api_key,
        request_timeout: config.request_timeout,
    })?;

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(
        address = %config.bind_address,
        upstream = %upstream_url,
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
