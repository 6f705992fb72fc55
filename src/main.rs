use std::{net::SocketAddr, sync::Arc};
use sustainability_tracker::{AppState, Config, HttpBackend, Tracker, router};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let backend = HttpBackend::new(config.backend_url.clone())?;
    info!(backend = %backend.base_url(), "using sustainability backend");

    let tracker = Arc::new(Tracker::new(backend));
    tracker.init().await;

    let app = router(AppState::new(Arc::clone(&tracker)));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracker.teardown().await;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
