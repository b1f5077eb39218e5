use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_planner::config::ServerConfig;
use trip_planner::web::{AppState, FormLimits, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let catalogue = config.catalogue()?;
    info!(
        source = %config
            .catalogue_path
            .as_deref()
            .map_or("built-in".into(), |p| p.display().to_string()),
        cities = catalogue.cities().len(),
        routes = catalogue.routes().len(),
        transports = catalogue.transports().len(),
        "loaded catalogue"
    );

    // Build app state
    let state = AppState::new(catalogue, config.planner(), FormLimits::default());

    // Create router
    let static_dir = config.static_dir.to_string_lossy();
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = config.addr;
    info!(distance = %config.distance, "Trip Planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /               - Planning form");
    info!("  GET  /health         - Health check");
    info!("  GET  /api/catalogue  - Routes, cities and transport modes");
    info!("  POST /trip/plan      - Price a trip");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
