use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::logger;
use relay::remote::TelegramClient;

use crate::config::RelayConfig;
use crate::state::AppState;

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_logger();
    dotenv().ok();

    let config = RelayConfig::from_env();
    let client = TelegramClient::new(
        config.telegram_api_base.clone(),
        config.dispatch_timeout,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, Arc::new(client));

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    info!("Spikecast signal relay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
