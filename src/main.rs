use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use gatekeeper::logging::init_tracing;
use gatekeeper::metrics::{init_metrics, metrics_app};
use gatekeeper::router::init_router;
use gatekeeper::state::init_app_state;
use gatekeeper_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing()?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await?;

    if let Some(handle) = init_metrics() {
        let metrics_addr = server_config.metrics_addr();
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr).await?;
        info!(addr = %metrics_addr, "Metrics server listening");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
