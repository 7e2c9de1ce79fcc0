use daily_progress::{router, AppConfig, AppState, RefreshOutcome};
use std::{net::SocketAddr, time::Duration};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    info!(
        data_path = %config.data_path.display(),
        refresh_delay_ms = config.refresh_delay.as_millis() as u64,
        "loaded configuration"
    );

    let state = AppState::new(config.data_path.clone(), config.refresh_delay);
    // initial load skips the pull-to-refresh delay
    if let RefreshOutcome::Failed(reason) = state.refresh_after(Duration::ZERO).await {
        warn!("no snapshot available at startup: {reason}");
    }

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
    }
    info!("shutting down");
}
