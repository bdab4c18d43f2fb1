use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod diagnostics;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // A missing .env is fine; real deployments set the environment directly
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        url = %config.mongodb.redacted_url(),
        database = %config.mongodb.database(),
        "Configuring MongoDB"
    );
    let mongo_client = database::mongodb::build_client(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    // Serve even while MongoDB is down; requests that need it fail on their own
    let index_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = database::retry(|| api::events::init_indexes(&index_db)).await {
            warn!(error = %e, "MongoDB unavailable, continuing without event indexes");
        }
    });

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let root = diagnostics::router(state.clone()).merge(health_router(state.config.app));
    let router = create_router::<openapi::ApiDoc>(root, api::routes(&state))?;

    let server_config = state.config.server.clone();
    let mongo_client = state.mongo_client.clone();
    drop(state);

    info!("Starting Campus Events API (30s shutdown timeout)");

    create_production_app(
        router,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            mongo_client.shutdown().await;
            info!("MongoDB connections closed");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Campus Events API shutdown complete");
    Ok(())
}
