use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use streamhub_lib::modules::gateway::{build_router, AppState};
use streamhub_lib::shared::utils::init_logger;
use streamhub_lib::shared::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = GatewayConfig::from_env();
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    log::info!("CORS enabled for: {}", config.allowed_origins().join(", "));

    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    log::info!("Gateway listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
