//! Catalog API - REST server for the product catalog

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{connect_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        max_connections = config.database.max_connections,
        "Connecting to database"
    );
    let db = connect_with_retry(config.database.clone(), None).await?;

    run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(()) => info!("Database connections closed"),
            Err(e) => tracing::warn!("Failed to close database connections: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
