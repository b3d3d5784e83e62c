//! Products API - product catalog and authentication over REST

use axum_helpers::{
    JwtAuth, create_cors_layer, create_production_app, create_router, health_router, parse_origin,
};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        environment = ?config.environment,
        require_auth_for_writes = config.require_auth_for_writes,
        "Starting {} v{}",
        config.app.name,
        config.app.version
    );

    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping schema migrations");
    }

    let state = AppState {
        jwt: JwtAuth::new(&config.jwt),
        config,
        db,
    };

    let cors = create_cors_layer(parse_origin(&state.config.cors_origin)?);
    let health = health_router(state.config.app).merge(api::health::router(state.clone()));
    let app = create_router::<openapi::ApiDoc>(api::routes(&state), health, cors);

    let db = state.db.clone();
    create_production_app(app, &state.config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL pool");
        if let Err(e) = db.close().await {
            warn!("Failed to close PostgreSQL pool cleanly: {}", e);
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
