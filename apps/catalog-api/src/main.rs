use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::{InMemoryItemRepository, ItemService};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Build the process-wide item store, seeded with the two demo records.
    // State lives only in memory: a restart resets it to the seeds.
    let repository = InMemoryItemRepository::seeded();
    let items = ItemService::new(repository);

    info!("Item store seeded with the demo records");

    let state = AppState { config, items };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs and common middleware
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge the liveness endpoint
    let app = router.merge(health_router(state.config.app));

    info!("Starting catalog API");

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
