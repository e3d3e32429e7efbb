use receipt_gateway::config::Config;
use receipt_gateway::{create_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting receipt gateway");

    let config = Config::from_env()?;
    let state = AppState::in_memory();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Gateway listening on {}", listener.local_addr()?);
    info!("   POST /receipts/process    - submit a receipt");
    info!("   GET  /receipts/:id/points - points for a stored receipt");
    info!("   GET  /health              - health check");
    info!("   GET  /metrics             - Prometheus metrics");

    axum::serve(listener, app).await?;

    Ok(())
}
