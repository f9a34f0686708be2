use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use tracing::info;

use at_api::{create_app, telemetry, AppState};
use at_core::AuthRelayService;
use at_infra::UpstreamClient;
use at_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        "Starting AromaTech API Server"
    );

    // One upstream client for the whole process
    let gateway = Arc::new(UpstreamClient::from_config(&config.upstream)?);
    let app_state = web::Data::new(AppState::new(AuthRelayService::new(gateway)));

    let bind_address = config.server.bind_address();
    info!(bind_address = %bind_address, "Server will bind");

    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), &cors, max_payload_size)
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    info!("Server stopped");
    Ok(())
}
