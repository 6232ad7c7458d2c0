//! Inventory API - REST server

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_inventory::{InMemoryProductStore, InventoryService, seed};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let store = InMemoryProductStore::new();
    if config.seed_sample_data {
        let seeded = seed::seed_if_empty(&store).await?;
        info!("Sample catalog ready ({} products inserted)", seeded);
    }

    let service = InventoryService::new(store);

    // Build REST router
    let api_routes = api::routes(service);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app));

    info!("Starting Inventory API on port {}", config.server.port);

    // Run server with graceful shutdown
    create_app(app, &config.server).await?;

    info!("Inventory API shutdown complete");
    Ok(())
}
